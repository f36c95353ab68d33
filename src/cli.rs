use crate::commands::plans::{list_plans, resolve_plan, suggest_warranty};
use crate::commands::purchases::{find_purchase, list_purchases, register_purchase};
use crate::commands::settings::{update_settings, UpdateSettingsParams};
use crate::models::{RawInput, Settings};
use crate::registration::{check_identity, DATE_FORMAT};
use crate::storage::{RecordStore, StoredPurchase};
use anyhow::bail;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "warranty-tracker")]
#[command(about = "Register purchased items and track their warranties.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the warranty plans on offer
    #[command(alias = "p")]
    Plans,
    /// Show the expiration date and fee a plan gives for a purchase date
    Suggest {
        #[arg(long)]
        purchase_date: String,
        /// Plan label or duration in days
        #[arg(long)]
        plan: String,
    },
    /// Validate and save a purchased item
    #[command(alias = "r")]
    Register(RegisterArgs),
    /// List saved purchases and their warranty status
    #[command(alias = "l")]
    List,
    /// Show a saved purchase by serial number
    Show { serial: String },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub item: String,
    #[arg(long)]
    pub serial: String,
    /// Defaults to today (YYYY-MM-DD)
    #[arg(long)]
    pub purchase_date: Option<String>,
    #[arg(long)]
    pub price: String,
    /// Plan label or duration in days
    #[arg(long)]
    pub plan: Option<String>,
    /// Warranty expiration (YYYY-MM-DD), used when no plan is chosen
    #[arg(long)]
    pub expires: Option<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Change one or more settings
    Set {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        log_level: Option<String>,
        #[arg(long)]
        log_retention_days: Option<u64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl RegisterArgs {
    /// Snapshot of the arguments as a registration form. A blank or oversized
    /// item name or serial number is reported before an unknown plan.
    pub fn to_raw_input(&self) -> anyhow::Result<RawInput> {
        let mut input = RawInput {
            item_name: self.item.clone(),
            serial_number: self.serial.clone(),
            purchase_date_text: self
                .purchase_date
                .clone()
                .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string()),
            purchase_price_text: self.price.clone(),
            warranty_expiration_date_text: self.expires.clone().unwrap_or_default(),
            selected_plan: None,
            notes: self.notes.clone(),
        };

        if let Some(plan) = &self.plan {
            check_identity(&input)?;
            input.selected_plan = Some(resolve_plan(plan)?);
        }

        Ok(input)
    }
}

pub fn dispatch(
    command: Commands,
    store: &dyn RecordStore,
    settings: &Settings,
) -> anyhow::Result<()> {
    let money = |amount: Decimal| format!("{}{:.2}", settings.currency_symbol, amount);

    match command {
        Commands::Plans => {
            for plan in list_plans() {
                println!(
                    "{:>4} days  {:>10}  {}",
                    plan.duration_days,
                    money(plan.fee),
                    plan.label
                );
            }
        }
        Commands::Suggest {
            purchase_date,
            plan,
        } => {
            let suggestion = suggest_warranty(&purchase_date, &plan)?;
            println!("Warranty expiration: {}", suggestion.expiration);
            println!("Warranty price: {}", money(suggestion.fee));
        }
        Commands::Register(args) => {
            let input = args.to_raw_input()?;
            let registration = register_purchase(store, &input)?;
            let record = &registration.record;

            println!("Item successfully saved! ({})", registration.id);
            if let Some(plan) = record.selected_plan() {
                println!("Warranty plan: {}", plan.label);
            }
            if let Some(expires) = record.warranty_expiration_date() {
                println!("Warranty expires: {}", expires);
            }
            println!("Total cost: {}", money(registration.total_cost));
        }
        Commands::List => {
            let purchases = list_purchases(store)?;
            if purchases.is_empty() {
                println!("No purchases registered yet.");
            }
            for purchase in &purchases {
                print_summary(purchase, &money);
            }
        }
        Commands::Show { serial } => match find_purchase(store, &serial)? {
            Some(purchase) => print_details(&purchase, &money),
            None => bail!("no purchase with serial number {:?}", serial),
        },
        Commands::Settings { action } => {
            let current = match action {
                Some(SettingsAction::Set {
                    currency,
                    log_level,
                    log_retention_days,
                }) => update_settings(UpdateSettingsParams {
                    currency_symbol: currency,
                    log_level,
                    log_retention_days,
                    ..UpdateSettingsParams::default()
                })?,
                None => settings.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
    }

    Ok(())
}

fn print_summary(purchase: &StoredPurchase, money: &dyn Fn(Decimal) -> String) {
    let record = &purchase.record;
    let today = Local::now().date_naive();
    let expires = record
        .warranty_expiration_date()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{:<20} {:<30} {}  {:>10}  expires {}  [{}]",
        record.serial_number(),
        record.item_name(),
        record.purchase_date(),
        money(record.purchase_price()),
        expires,
        record.warranty_status(today)
    );
}

fn print_details(purchase: &StoredPurchase, money: &dyn Fn(Decimal) -> String) {
    let record = &purchase.record;
    let today = Local::now().date_naive();

    println!("Id:                  {}", purchase.id);
    println!("Item name:           {}", record.item_name());
    println!("Serial number:       {}", record.serial_number());
    println!("Purchase date:       {}", record.purchase_date());
    println!("Purchase price:      {}", money(record.purchase_price()));
    match record.selected_plan() {
        Some(plan) => println!("Warranty plan:       {}", plan.label),
        None => println!("Warranty plan:       none"),
    }
    if let Some(expires) = record.warranty_expiration_date() {
        println!("Warranty expiration: {}", expires);
    }
    println!("Warranty price:      {}", money(record.warranty_fee()));
    println!("Total cost:          {}", money(record.total_cost()));
    match record.days_remaining(today) {
        Some(days) => println!(
            "Status:              {} ({} days left)",
            record.warranty_status(today),
            days
        ),
        None => println!("Status:              {}", record.warranty_status(today)),
    }
    if !record.maintenance_notes().is_empty() {
        println!("Maintenance notes:   {}", record.maintenance_notes());
    }
    println!("Registered at:       {}", purchase.created_at.to_rfc3339());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;
    use crate::registration::{Field, ValidationError};

    fn register_args(item: &str, plan: Option<&str>) -> RegisterArgs {
        RegisterArgs {
            item: item.to_string(),
            serial: "SN123".to_string(),
            purchase_date: Some("2024-06-01".to_string()),
            price: "999.99".to_string(),
            plan: plan.map(str::to_string),
            expires: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_blank_item_reported_before_unknown_plan() {
        let err = register_args("  ", Some("lifetime")).to_raw_input().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::MissingField(Field::ItemName))
        );
    }

    #[test]
    fn test_unknown_plan_with_valid_identity() {
        let err = register_args("Laptop", Some("lifetime")).to_raw_input().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommandError>(),
            Some(CommandError::UnknownPlan(_))
        ));
    }

    #[test]
    fn test_plan_resolved_from_days() {
        let input = register_args("Laptop", Some("60")).to_raw_input().unwrap();
        assert_eq!(input.selected_plan.map(|p| p.duration_days), Some(60));
        assert_eq!(input.purchase_date_text, "2024-06-01");
    }
}
