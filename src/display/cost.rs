//! Cost list and detail formatting

use crate::models::CostRecord;

/// Format the full cost list as an aligned table
pub fn format_cost_list(costs: &[CostRecord]) -> String {
    if costs.is_empty() {
        return "No costs tracked yet.\n\nRun 'subtrack cost add' to add your first one.\n"
            .to_string();
    }

    let name_width = costs
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<18}  {:>10}  {:<8}  {:<10}  {}\n",
        "Name", "Category", "Cost", "Cycle", "Renews", "ID"
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<18}  {:->10}  {:-<8}  {:-<10}  {:-<13}\n",
        "", "", "", "", "", ""
    ));

    for cost in costs {
        output.push_str(&format!(
            "{:<name_width$}  {:<18}  {:>10}  {:<8}  {:<10}  {}\n",
            cost.name,
            cost.category.label(),
            cost.cost.to_string(),
            cost.billing_cycle.label(),
            cost.renewal_date,
            cost.id
        ));
    }

    output
}

/// Format a single cost with all fields
pub fn format_cost_details(cost: &CostRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", cost.name));
    output.push_str(&format!("  Category:     {}\n", cost.category));
    output.push_str(&format!(
        "  Cost:         {} ({})\n",
        cost.cost, cost.billing_cycle
    ));
    output.push_str(&format!(
        "  Monthly eq.:  {}\n",
        cost.monthly_equivalent()
    ));
    output.push_str(&format!("  Renews:       {}\n", cost.renewal_date));
    output.push_str(&format!("  ID:           {}\n", cost.id));
    output
}
