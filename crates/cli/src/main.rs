mod page;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Classifier, FilterConfig};
use metadata::{extract, locate_payload, ItemRecord, MetadataTable, PageItem, SubmissionId};
use page::PageDocument;
use settings::Settings;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Gallery Filter - hide gallery submissions by rating, artist and keyword
#[derive(Parser)]
#[command(name = "gallery-filter")]
#[command(about = "Classify gallery submissions against user filter settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metadata extracted from a page document
    Extract {
        /// Page document (JSON)
        #[arg(long)]
        page: PathBuf,

        /// Print records as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Decide which submissions on a page are hidden
    Classify {
        /// Page document (JSON)
        #[arg(long)]
        page: PathBuf,

        /// Stored settings (JSON). Defaults to first-run settings.
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Print verdicts as a JSON object instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Validate a settings file and show the derived filter config
    CheckSettings {
        /// Stored settings (JSON)
        #[arg(long)]
        settings: PathBuf,

        /// Print the derived filter config as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Extract { page, json } => handle_extract(&page, json)?,
        Commands::Classify {
            page,
            settings,
            json,
        } => handle_classify(&page, settings.as_deref(), json)?,
        Commands::CheckSettings { settings, json } => handle_check_settings(&settings, json)?,
    }

    Ok(())
}

/// Load a page document and extract its metadata table
fn load_page(path: &Path) -> Result<(Vec<PageItem>, MetadataTable)> {
    let page = PageDocument::load(path)?;
    let payload = locate_payload(&page.scripts);
    info!(
        "Loaded {} items from {} ({})",
        page.items.len(),
        path.display(),
        if payload.is_some() { "embedded payload" } else { "captions only" }
    );

    let records = extract(&page.items, payload);
    Ok((page.items, records))
}

/// Handle the 'extract' command
fn handle_extract(path: &Path, json: bool) -> Result<()> {
    let (items, records) = load_page(path)?;

    if json {
        let ordered: Vec<&ItemRecord> = items
            .iter()
            .filter_map(|item| records.get(&item.id))
            .collect();
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }

    println!("{}", format!("{} records", records.len()).bold().blue());
    for item in &items {
        match records.get(&item.id) {
            Some(record) => {
                println!("{}{} by {}", "• ".green(), record.title.bold(), record.author_name);
                if !record.description.is_empty() {
                    println!("    {}", record.description.dimmed());
                }
            }
            None => println!("{}{} (no metadata)", "• ".yellow(), item.id),
        }
    }

    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(page: &Path, settings_path: Option<&Path>, json: bool) -> Result<()> {
    let settings = match settings_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let config = settings.to_filter_config();
    let (items, records) = load_page(page)?;

    let verdicts = decide(&items, &records, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
        return Ok(());
    }

    let style = settings.suppression_style();
    let mut hidden = 0;
    for item in &items {
        let (title, author) = match records.get(&item.id) {
            Some(record) => (record.title.as_str(), record.author_name.as_str()),
            None => (item.title.as_str(), item.author.as_str()),
        };
        if verdicts.get(&item.id).copied().unwrap_or(false) {
            hidden += 1;
            println!("{} {} {} by {}", "✗".red(), style.css_class().red(), title, author);
        } else {
            println!("{} {} {} by {}", "✓".green(), "visible".green(), title, author);
        }
    }
    println!(
        "{}",
        format!("{} of {} items hidden", hidden, items.len()).bold()
    );

    Ok(())
}

/// Run the engine when the config and page call for it.
///
/// A disabled config or a page without metadata shows everything.
fn decide(
    items: &[PageItem],
    records: &MetadataTable,
    config: &FilterConfig,
) -> BTreeMap<SubmissionId, bool> {
    if !config.enabled || records.is_empty() {
        info!("Nothing to filter, all items visible");
        return items.iter().map(|item| (item.id, false)).collect();
    }

    let start = Instant::now();
    let verdicts = Classifier::new(config).classify(items, records);
    info!(
        "Classified {} items in {:?} ({} hidden)",
        verdicts.len(),
        start.elapsed(),
        verdicts.suppressed_count()
    );

    verdicts.into_map().into_iter().collect()
}

/// Handle the 'check-settings' command
fn handle_check_settings(path: &Path, json: bool) -> Result<()> {
    let settings = Settings::load(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    let config = settings.to_filter_config();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{} {}", "✓".green(), "Settings are valid".bold());
    println!("{}Enabled: {}", "• ".cyan(), config.enabled);
    println!("{}Suppression: {}", "• ".cyan(), settings.suppression_style().css_class());
    println!("{}Notifications: {}", "• ".cyan(), settings.messaging_enabled);
    println!("{}Remove banner: {}", "• ".cyan(), settings.remove_banner);

    let mut ratings: Vec<&String> = config.rating_classes.iter().collect();
    ratings.sort();
    println!("{}Permitted ratings: {:?}", "• ".cyan(), ratings);
    println!("{}Blocked artists: {}", "• ".cyan(), config.blocked_artists.len());
    println!("{}Allowed artists: {}", "• ".cyan(), config.allowed_artists.len());

    println!("{}Keyword groups:", "• ".cyan());
    for group in &config.blocked_keyword_groups {
        if group.is_empty() {
            println!("  - {}", "(blank, never matches)".dimmed());
        } else {
            println!("  - {}", group.terms().join(" AND "));
        }
    }

    Ok(())
}
