//! Cost CLI commands
//!
//! Implements CLI commands for cost record management.

use clap::Subcommand;

use crate::display::{format_cost_details, format_cost_list};
use crate::error::{SubtrackError, SubtrackResult};
use crate::models::{BillingCycle, CostCategory, CostRecord, Money};
use crate::services::CostService;
use crate::storage::Storage;

/// Cost subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// List all costs
    List,

    /// Add a new cost
    Add {
        /// Service name
        name: String,
        /// Category (e.g. "cloud", "marketing", "domains", "ads", "office", "other")
        #[arg(short, long)]
        category: String,
        /// Billed amount in USD (e.g. "20" or "19.99")
        #[arg(long)]
        cost: String,
        /// Billing cycle: monthly or annually
        #[arg(long, default_value = "monthly")]
        cycle: String,
        /// Renewal date (YYYY-MM-DD)
        #[arg(short, long)]
        renews: String,
    },

    /// Show cost details
    Show {
        /// Cost name or ID
        cost: String,
    },

    /// Edit a cost
    Edit {
        /// Cost name or ID
        cost: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New amount
        #[arg(long)]
        cost_amount: Option<String>,
        /// New billing cycle
        #[arg(long)]
        cycle: Option<String>,
        /// New renewal date (YYYY-MM-DD)
        #[arg(long)]
        renews: Option<String>,
    },

    /// Delete a cost
    Delete {
        /// Cost name or ID
        cost: String,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Handle a cost command
pub fn handle_cost_command(storage: &Storage, cmd: CostCommands) -> SubtrackResult<()> {
    let service = CostService::new(storage);

    match cmd {
        CostCommands::List => {
            let costs = service.list_costs()?;
            print!("{}", format_cost_list(&costs));
        }

        CostCommands::Add {
            name,
            category,
            cost,
            cycle,
            renews,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&cost)?;
            let cycle = parse_cycle(&cycle)?;

            let record = service.add_cost(&name, category, amount, cycle, &renews)?;

            println!("Added cost: {}", record.name);
            println!("  Category: {}", record.category);
            println!("  Cost:     {} ({})", record.cost, record.billing_cycle);
            println!("  Renews:   {}", record.renewal_date);
            println!("  ID:       {}", record.id);
        }

        CostCommands::Show { cost } => {
            let record = require_cost(&service, &cost)?;
            print!("{}", format_cost_details(&record));
        }

        CostCommands::Edit {
            cost,
            name,
            category,
            cost_amount,
            cycle,
            renews,
        } => {
            let mut record = require_cost(&service, &cost)?;

            if let Some(name) = name {
                record.name = name.trim().to_string();
            }
            if let Some(category) = category {
                record.category = parse_category(&category)?;
            }
            if let Some(amount) = cost_amount {
                record.cost = parse_amount(&amount)?;
            }
            if let Some(cycle) = cycle {
                record.billing_cycle = parse_cycle(&cycle)?;
            }
            if let Some(renews) = renews {
                record.renewal_date = renews;
            }

            let updated = service.update_cost(record)?;
            println!("Updated cost: {}", updated.name);
            print!("{}", format_cost_details(&updated));
        }

        CostCommands::Delete { cost, force } => {
            let record = require_cost(&service, &cost)?;

            if !force && !confirm_delete(&record)? {
                println!("Cancelled.");
                return Ok(());
            }

            let removed = service.delete_cost(record.id)?;
            println!("Deleted cost: {}", removed.name);
        }
    }

    Ok(())
}

/// Look up a cost by name or ID, failing with "not found" otherwise
pub fn require_cost(service: &CostService, identifier: &str) -> SubtrackResult<CostRecord> {
    service
        .find_cost(identifier)?
        .ok_or_else(|| SubtrackError::cost_not_found(identifier))
}

/// Ask the user to confirm a deletion on stdin
fn confirm_delete(record: &CostRecord) -> SubtrackResult<bool> {
    println!(
        "Delete '{}' ({}, {})? Type 'y' to confirm:",
        record.name, record.cost, record.billing_cycle
    );

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

fn parse_category(s: &str) -> SubtrackResult<CostCategory> {
    s.parse().map_err(SubtrackError::Validation)
}

fn parse_cycle(s: &str) -> SubtrackResult<BillingCycle> {
    s.parse().map_err(SubtrackError::Validation)
}

fn parse_amount(s: &str) -> SubtrackResult<Money> {
    Money::parse(s).map_err(|e| SubtrackError::Validation(e.to_string()))
}
