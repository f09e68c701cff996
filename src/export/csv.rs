//! CSV export
//!
//! Writes the cost collection as a flat spreadsheet-compatible table.

use std::io::Write;

use crate::error::{SubtrackError, SubtrackResult};
use crate::models::CostRecord;

/// Export all costs to CSV
pub fn export_costs_csv<W: Write>(costs: &[CostRecord], writer: W) -> SubtrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Name",
            "Category",
            "Cost",
            "Billing Cycle",
            "Renewal Date",
            "Monthly Equivalent",
        ])
        .map_err(|e| SubtrackError::Export(e.to_string()))?;

    for cost in costs {
        csv_writer
            .write_record([
                cost.id.as_uuid().to_string(),
                cost.name.clone(),
                cost.category.label().to_string(),
                format!("{:.2}", cost.cost.rounded()),
                cost.billing_cycle.label().to_string(),
                cost.renewal_date.clone(),
                format!("{:.2}", cost.monthly_equivalent().rounded()),
            ])
            .map_err(|e| SubtrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SubtrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, CostCategory, Money};

    #[test]
    fn test_export_costs_csv() {
        let costs = vec![
            CostRecord::new(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "2026-09-15",
            ),
            CostRecord::new(
                "Google Workspace",
                CostCategory::Marketing,
                Money::from_dollars(144.0),
                BillingCycle::Annually,
                "2027-01-01",
            ),
        ];

        let mut buffer = Vec::new();
        export_costs_csv(&costs, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Name,Category"));
        assert!(lines[1].contains("Vercel"));
        assert!(lines[1].contains("20.00"));
        assert!(lines[2].contains("144.00"));
        assert!(lines[2].contains("12.00")); // monthly equivalent of 144/yr
    }

    #[test]
    fn test_export_empty_collection() {
        let mut buffer = Vec::new();
        export_costs_csv(&[], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1); // header only
    }
}
