//! Cost summary report
//!
//! Pure aggregation over the cost collection: monthly-equivalent totals
//! overall and per category. Recomputed from scratch on every call.

use crate::models::{CostCategory, CostRecord, Money};

/// Monthly-equivalent total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category
    pub category: CostCategory,
    /// Sum of monthly-equivalents for costs in this category
    pub monthly_total: Money,
}

/// Aggregated view of the whole cost collection
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    /// Sum of all monthly-equivalents
    pub total_monthly: Money,
    /// Always exactly 12 x total_monthly (derived, never summed separately)
    pub total_annual: Money,
    /// One entry per category in enum order, including zero totals
    pub category_totals: Vec<CategoryTotal>,
}

impl CostSummary {
    /// Compute the summary for a cost collection
    ///
    /// An empty collection yields zero totals. Amounts accumulate at full
    /// precision; rounding belongs to the display layer.
    pub fn generate(costs: &[CostRecord]) -> Self {
        let total_monthly: Money = costs.iter().map(|c| c.monthly_equivalent()).sum();

        let category_totals = CostCategory::all()
            .iter()
            .map(|&category| CategoryTotal {
                category,
                monthly_total: costs
                    .iter()
                    .filter(|c| c.category == category)
                    .map(|c| c.monthly_equivalent())
                    .sum(),
            })
            .collect();

        Self {
            total_monthly,
            // Deriving the annual figure from the monthly one keeps the
            // annual = 12 x monthly identity exact.
            total_annual: total_monthly * 12.0,
            category_totals,
        }
    }

    /// Category totals with zero entries filtered out, for chart display
    pub fn chart_totals(&self) -> Vec<&CategoryTotal> {
        self.category_totals
            .iter()
            .filter(|t| !t.monthly_total.is_zero())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillingCycle;

    fn cost(
        name: &str,
        category: CostCategory,
        amount: f64,
        cycle: BillingCycle,
    ) -> CostRecord {
        CostRecord::new(
            name,
            category,
            Money::from_dollars(amount),
            cycle,
            "2026-09-15",
        )
    }

    #[test]
    fn test_empty_collection() {
        let summary = CostSummary::generate(&[]);

        assert!(summary.total_monthly.is_zero());
        assert!(summary.total_annual.is_zero());
        assert_eq!(summary.category_totals.len(), 6);
        assert!(summary.chart_totals().is_empty());
    }

    #[test]
    fn test_mixed_cycle_totals() {
        // [{120 annually, Cloud}, {10 monthly, Other}]
        // -> monthly-equivalents [10, 10], monthly 20, annual 240
        let costs = vec![
            cost("AWS", CostCategory::Cloud, 120.0, BillingCycle::Annually),
            cost("Misc", CostCategory::Other, 10.0, BillingCycle::Monthly),
        ];

        let summary = CostSummary::generate(&costs);
        assert_eq!(summary.total_monthly, Money::from_dollars(20.0));
        assert_eq!(summary.total_annual, Money::from_dollars(240.0));

        let cloud = &summary.category_totals[0];
        assert_eq!(cloud.category, CostCategory::Cloud);
        assert_eq!(cloud.monthly_total, Money::from_dollars(10.0));

        let other = &summary.category_totals[5];
        assert_eq!(other.category, CostCategory::Other);
        assert_eq!(other.monthly_total, Money::from_dollars(10.0));
    }

    #[test]
    fn test_annual_is_exactly_twelve_times_monthly() {
        // 100/yr has a repeating monthly-equivalent; the annual total must
        // still come out as exactly 12 x the monthly total.
        let costs = vec![
            cost("A", CostCategory::Cloud, 100.0, BillingCycle::Annually),
            cost("B", CostCategory::Ads, 7.77, BillingCycle::Monthly),
        ];

        let summary = CostSummary::generate(&costs);
        assert_eq!(
            summary.total_annual.amount(),
            summary.total_monthly.amount() * 12.0
        );
    }

    #[test]
    fn test_category_totals_conserve_total() {
        let costs = vec![
            cost("A", CostCategory::Cloud, 100.0, BillingCycle::Annually),
            cost("B", CostCategory::Cloud, 15.5, BillingCycle::Monthly),
            cost("C", CostCategory::Marketing, 30.0, BillingCycle::Monthly),
            cost("D", CostCategory::Other, 55.0, BillingCycle::Annually),
        ];

        let summary = CostSummary::generate(&costs);
        let sum_of_categories: Money = summary
            .category_totals
            .iter()
            .map(|t| t.monthly_total)
            .sum();

        assert!((sum_of_categories.amount() - summary.total_monthly.amount()).abs() < 1e-9);
    }

    #[test]
    fn test_all_six_categories_present_even_at_zero() {
        let costs = vec![cost("A", CostCategory::Cloud, 10.0, BillingCycle::Monthly)];
        let summary = CostSummary::generate(&costs);

        assert_eq!(summary.category_totals.len(), 6);
        let categories: Vec<_> = summary.category_totals.iter().map(|t| t.category).collect();
        assert_eq!(categories, CostCategory::all());
    }

    #[test]
    fn test_chart_totals_exclude_zero() {
        let costs = vec![
            cost("A", CostCategory::Cloud, 10.0, BillingCycle::Monthly),
            cost("B", CostCategory::Office, 5.0, BillingCycle::Monthly),
        ];

        let summary = CostSummary::generate(&costs);
        let chart = summary.chart_totals();
        assert_eq!(chart.len(), 2);
        assert!(chart.iter().all(|t| !t.monthly_total.is_zero()));
    }
}
