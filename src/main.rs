//! Logistics COP - Main entry point
//!
//! Terminal front end for the record workflows: reads form values from the
//! command line, hands them to the workflow, and renders the outcome.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use logcop::cli::{Cli, Commands, PersonnelCommands, SupplyCommands};
use logcop::entity::EntityKind;
use logcop::workflow::{SubmissionResult, WorkflowController};
use logcop::{App, AppConfig, PersonnelRecord, RawFields, SupplyRecord, report};

/// Initialize tracing. RUST_LOG overrides the configured level.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = load_config(&cli)?;

    init_logging(&config.log_level);
    info!("Logistics COP starting up");
    debug!(?config, "configuration loaded");

    let mut app = App::open(&config);

    let ok = match cli.command {
        Commands::Init => {
            for (name, available, path) in [
                (PersonnelRecord::NAME, app.personnel.is_available(), config.personnel_db_path()),
                (SupplyRecord::NAME, app.supply.is_available(), config.supply_db_path()),
            ] {
                let mark = if available { "✓" } else { "✗" };
                println!("{} {} store: {}", mark, name, path.display());
            }
            app.personnel.is_available() && app.supply.is_available()
        }
        Commands::Personnel { action } => match action {
            PersonnelCommands::Submit(form) => {
                let fields = form.fields().context("Failed to read personnel form input")?;
                submit(&mut app.personnel, &fields)
            }
            PersonnelCommands::List { json } => {
                let records = app.personnel.list_all();
                if json {
                    print_json(&records)?;
                } else {
                    println!("{}", report::personnel_table(&records));
                }
                true
            }
        },
        Commands::Supply { action } => match action {
            SupplyCommands::Submit(form) => {
                let fields = form.fields().context("Failed to read supply form input")?;
                submit(&mut app.supply, &fields)
            }
            SupplyCommands::List { json } => {
                let records = app.supply.list_all();
                if json {
                    print_json(&records)?;
                } else {
                    println!("{}", report::supply_table(&records));
                }
                true
            }
        },
        Commands::Sites { json } => {
            if json {
                print_json(&app.picture)?;
            } else {
                println!("{}", report::sites_summary(&app.picture));
                println!("{}", report::map_center(&app.picture));
                println!();
                println!("{}", report::sites_table(&app.picture));
            }
            true
        }
        Commands::Dashboard => {
            println!("🚛 Logistics Common Operating Picture");
            println!();
            println!("{}", report::sites_summary(&app.picture));
            println!("{}", report::map_center(&app.picture));
            println!("{}", report::sites_table(&app.picture));
            println!();
            println!("Personnel");
            println!("{}", report::personnel_table(&app.personnel.list_all()));
            println!();
            println!("Supply");
            println!("{}", report::supply_table(&app.supply.list_all()));
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Run one submission and print its outcome, followed by the refreshed list
fn submit<K: EntityKind>(workflow: &mut WorkflowController<K>, fields: &RawFields) -> bool {
    let id = fields.text(K::key_column());
    let result: SubmissionResult = workflow.submit(fields);
    if result.ok {
        println!("{}", report::submission(K::NAME, &id, &result));
        println!("{} {} record(s) on file", workflow.list_all().len(), K::NAME.to_lowercase());
    } else {
        eprintln!("{}", report::submission(K::NAME, &id, &result));
    }
    result.ok
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
