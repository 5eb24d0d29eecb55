use std::path::{Path, PathBuf};

use clap::Parser;

use horse_diet_rs::catalog::{builtin_catalog, load_catalog, FeedCatalog};
use horse_diet_rs::cli::{Cli, Command};
use horse_diet_rs::error::Result;
use horse_diet_rs::evaluator::evaluate_diet;
use horse_diet_rs::interface::{
    collect_diet_inputs, display_evaluation, display_feed_list, evaluation_json,
    write_report_csv,
};
use horse_diet_rs::models::{BodyWeight, FeedEntry};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let catalog = open_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Evaluate {
            weight,
            feeds,
            json,
            csv,
        } => cmd_evaluate(&catalog, &weight, &feeds, json, csv),
        Command::Interactive => cmd_interactive(&catalog),
        Command::Feeds => {
            display_feed_list(&catalog);
            Ok(())
        }
    }
}

/// Load the catalog from a file, or fall back to the built-in one.
fn open_catalog(path: Option<&Path>) -> Result<FeedCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            tracing::debug!("Using built-in feed catalog");
            builtin_catalog()
        }
    }
}

/// Evaluate a diet passed as `--weight` and `--feed id=amount` flags.
fn cmd_evaluate(
    catalog: &FeedCatalog,
    weight: &str,
    feeds: &[String],
    json: bool,
    csv: Option<PathBuf>,
) -> Result<()> {
    let weight: BodyWeight = weight.parse()?;
    let entries: Vec<FeedEntry> = feeds.iter().map(|f| FeedEntry::from_pair(f)).collect();

    let evaluation = evaluate_diet(weight, &entries, catalog);

    if json {
        println!("{}", evaluation_json(&evaluation)?);
    } else {
        display_evaluation(&evaluation);
    }

    if let (Some(path), Some(report)) = (csv, evaluation.report()) {
        write_report_csv(report, &path)?;
        if !json {
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Prompt for the weight and feeds, then evaluate.
fn cmd_interactive(catalog: &FeedCatalog) -> Result<()> {
    if catalog.is_empty() {
        println!("The feed catalog is empty. Use --catalog to load one.");
        return Ok(());
    }

    println!("Loaded {} feeds", catalog.len());
    println!();

    let (weight, entries) = collect_diet_inputs(catalog)?;
    let evaluation = evaluate_diet(weight, &entries, catalog);
    display_evaluation(&evaluation);

    Ok(())
}
