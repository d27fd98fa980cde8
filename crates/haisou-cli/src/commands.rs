//! Command handlers

use std::path::PathBuf;

use chrono::NaiveTime;

use haisou_app::app::{run_balance, BalanceOptions};
use haisou_app::config::Config;
use haisou_app::export::export_to_excel;
use haisou_domain::repository::DeliveryPlanRepository;
use haisou_domain::service::schedule::{generate_slot_times, slot_labels};
use haisou_infra::persistence::FileDeliveryPlanRepository;
use haisou_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::output_result;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let verbose = cli.verbose;

    match cli.command {
        Commands::Balance {
            input,
            capacity,
            unit,
            output,
        } => cmd_balance(input, capacity, unit, output, format, verbose, &config),
        Commands::Slots {
            start,
            end,
            deliveries,
        } => cmd_slots(&start, &end, deliveries, format),
        Commands::Config {
            show,
            set_capacity,
            set_output,
        } => cmd_config(show, set_capacity, set_output, config),
    }
}

fn cmd_balance(
    input: PathBuf,
    capacity: Option<u32>,
    units: Vec<String>,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
    config: &Config,
) -> Result<()> {
    let repo = FileDeliveryPlanRepository::open(input)?;
    let plan = repo.load_plan()?;

    if verbose {
        eprintln!(
            "Loaded {} rows across {} slots from {}",
            plan.rows.len(),
            plan.num_slots(),
            repo.path().display()
        );
        eprintln!("Drive units: {}", plan.drive_units().join(", "));
    }

    // Zero capacity is a legal degenerate run, but always worth a warning:
    // every slot starts full and the whole plan lands in the overflow report.
    let effective_capacity = capacity.unwrap_or(config.default_capacity);
    if effective_capacity == 0 {
        eprintln!("Warning: capacity per slot is 0; all planned quantity will be unassigned");
    }

    let mut options = BalanceOptions::new().with_units(units);
    if let Some(c) = capacity {
        options = options.with_capacity(c);
    }

    let result = run_balance(&plan, &options, config)?;

    output_result(format, &result)?;

    if !result.overflow.is_empty() {
        eprintln!("{}", result.overflow.summary());
    }

    if let Some(path) = output {
        export_to_excel(&result, &path)?;
        if verbose {
            eprintln!("Balanced plan written to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_slots(start: &str, end: &str, deliveries: u32, format: OutputFormat) -> Result<()> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    let labels = slot_labels(&generate_slot_times(start, end, deliveries));

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else if labels.is_empty() {
        println!("No delivery slots.");
    } else {
        for label in labels {
            println!("{}", label);
        }
    }

    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| Error::InvalidInput(format!("Invalid time (expected HH:MM): {s}")))
}

fn cmd_config(
    show: bool,
    set_capacity: Option<u32>,
    set_output: Option<OutputFormat>,
    mut config: Config,
) -> Result<()> {
    let mut changed = false;

    if let Some(capacity) = set_capacity {
        if capacity == 0 {
            eprintln!("Warning: a default capacity of 0 makes every balancing run degenerate");
        }
        config.default_capacity = capacity;
        changed = true;
    }
    if let Some(output_format) = set_output {
        config.output_format = output_format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("Default capacity: {} containers per slot", config.default_capacity);
        println!("Output format:    {}", config.output_format);
    }

    Ok(())
}
