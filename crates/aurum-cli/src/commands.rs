use std::path::Path;

use anyhow::Context;
use aurum_compare::{Comparator, Outcome};
use aurum_store::{DirectoryStore, GoldenStore};
use aurum_types::GoldenValue;
use colored::Colorize;
use serde_json::json;

use crate::cli::*;
use crate::config::AurumConfig;

/// Run a parsed command. Returns `false` when a comparison failed.
pub fn run_command(cli: Cli) -> anyhow::Result<bool> {
    let mut config = AurumConfig::load(&cli.config)?;
    if let Some(root) = cli.root {
        config.store.root = root;
    }
    let store = DirectoryStore::open(config.store.clone());

    match cli.command {
        Command::Save(args) => cmd_save(&store, args, &cli.format),
        Command::List(_) => cmd_list(&store, &cli.format),
        Command::Show(args) => cmd_show(&store, args),
        Command::Compare(args) => cmd_compare(&store, config, args, &cli.format),
    }
}

fn read_value(path: &Path) -> anyhow::Result<GoldenValue> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("decoding {}", path.display()))
}

fn cmd_save(store: &DirectoryStore, args: SaveArgs, format: &OutputFormat) -> anyhow::Result<bool> {
    let value = read_value(&args.file)?;
    value.validate()?;
    let report = store.save(&[(value, args.name.as_str())])?;

    match format {
        OutputFormat::Json => {
            println!("{}", json!({"written": report.written, "skipped": report.skipped}));
        }
        OutputFormat::Text => {
            for name in &report.written {
                println!("{} Saved {} to {}", "✓".green().bold(), name.yellow(), store.path_for(name).display());
            }
            for name in &report.skipped {
                println!("{} {} already exists; not overwritten", "!".yellow().bold(), name.yellow());
            }
        }
    }
    Ok(true)
}

fn cmd_list(store: &DirectoryStore, format: &OutputFormat) -> anyhow::Result<bool> {
    let goldens = store.load_all()?;

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = goldens
                .iter()
                .map(|(name, value)| json!({"name": name, "category": value.category()}))
                .collect();
            println!("{}", serde_json::Value::Array(entries));
        }
        OutputFormat::Text if goldens.is_empty() => {
            println!("No golden objects in {}.", store.root().display());
        }
        OutputFormat::Text => {
            for (name, value) in goldens.iter() {
                println!("{:<32} {}", name, value.category().to_string().cyan());
            }
        }
    }
    Ok(true)
}

fn cmd_show(store: &DirectoryStore, args: ShowArgs) -> anyhow::Result<bool> {
    let value = store.load_one(&args.name)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(true)
}

fn cmd_compare(
    store: &DirectoryStore,
    config: AurumConfig,
    args: CompareArgs,
    format: &OutputFormat,
) -> anyhow::Result<bool> {
    let candidate = read_value(&args.file)?;
    let comparator = Comparator::from_store(store, config.compare)?;
    let outcome = comparator.compare(&candidate, &args.name)?;
    let message = outcome.render(&comparator.config().messages);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                json!({
                    "name": args.name,
                    "pass": outcome.is_pass(),
                    "message": message,
                    "reason": outcome.reason().map(|r| r.to_string()),
                })
            );
        }
        OutputFormat::Text => match &outcome {
            Outcome::Pass => println!("{} {}", "✓".green().bold(), message.green()),
            Outcome::Fail(reason) => {
                println!("{} {}", "✗".red().bold(), message.red());
                if args.explain {
                    println!("  {}", reason.to_string().dimmed());
                }
            }
        },
    }

    Ok(outcome.is_pass())
}
