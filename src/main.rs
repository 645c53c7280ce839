//! Command-line front end for the report viewer.
//!
//! # Usage
//!
//! ```bash
//! # Render a report from a local site directory to an HTML file
//! reportview render --id 42 --site ./public --out report.html
//!
//! # Render the built-in sample
//! reportview render
//!
//! # List every report the layered index knows about
//! reportview list --site https://reports.example.com/
//!
//! # Show the anchors headings would receive
//! reportview slug "Market Overview" "Market Overview" "数据 分析"
//!
//! # Validate a search entry and print the creation page URL
//! reportview entry "asin=B07ZPKBL9V&marketplace=DE"
//! ```

use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::info;
use reportview::entry::DEFAULT_CREATE_PAGE;
use reportview::{
    HtmlPage, LocalStore, ReportRecord, ReportViewer, ReportViewerBuilder, SearchEntry, Slugger,
    ViewState, ViewerConfig, ViewerError, provider_for,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "reportview")]
#[command(about = "Render and browse product analysis reports")]
struct Cli {
    /// Viewer configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local store snapshot: a JSON object of key to string value
    #[arg(long, global = true)]
    local_store: Option<PathBuf>,

    /// JSON array of records made available before any lookup
    #[arg(long, global = true)]
    preloaded: Option<PathBuf>,

    /// Site directory or base URL serving the report index and documents
    #[arg(long, global = true)]
    site: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report to a standalone HTML page
    Render {
        /// Report id; omit to render the sample report
        #[arg(long)]
        id: Option<String>,

        /// Output file; defaults to stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List known reports, higher-priority sources first
    List,

    /// Print the anchor ids the given headings would receive
    Slug {
        #[arg(required = true)]
        headings: Vec<String>,
    },

    /// Validate a search entry query and print the creation page URL
    Entry {
        query: String,

        #[arg(long, default_value = DEFAULT_CREATE_PAGE)]
        create_page: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ViewerError> {
    match &cli.command {
        Commands::Render { id, out } => {
            let mut viewer = build_viewer(&cli)?;
            // The error state is already rendered into the page.
            let _ = viewer.load(id.as_deref());
            let failed = matches!(viewer.state(), ViewState::Error(_));

            let html = viewer.target().to_html();
            match out {
                Some(path) => {
                    fs::write(path, html)?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Commands::List => {
            let mut viewer = build_viewer(&cli)?;
            for record in viewer.records()? {
                println!("{}", describe(&record));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Slug { headings } => {
            let mut slugger = Slugger::new();
            let line = headings
                .iter()
                .enumerate()
                .map(|(position, text)| slugger.anchor_for(text, position))
                .join(" ");
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Entry { query, create_page } => match SearchEntry::from_query(query) {
            Ok(entry) => {
                println!("{}", entry.creation_url(create_page));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn build_viewer(cli: &Cli) -> Result<ReportViewer<HtmlPage>, ViewerError> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)?,
        None => ViewerConfig::default(),
    };
    let page = HtmlPage::new(config.site_name.clone());
    let mut builder = ReportViewerBuilder::new().with_config(config);

    if let Some(path) = &cli.local_store {
        builder = builder.with_local_store(LocalStore::from_json(&fs::read_to_string(path)?)?);
    }
    if let Some(path) = &cli.preloaded {
        let records: Vec<ReportRecord> = serde_json::from_str(&fs::read_to_string(path)?)?;
        builder = builder.with_preloaded(records);
    }
    if let Some(site) = &cli.site {
        builder = builder.with_provider(Arc::from(provider_for(site)?));
    }
    builder.build(page)
}

fn describe(record: &ReportRecord) -> String {
    let location = match (&record.content, &record.markdown_path) {
        (Some(_), _) => "inline".to_string(),
        (None, Some(path)) => path.clone(),
        (None, None) => "-".to_string(),
    };
    [record.id.as_str(), record.display_title(), record.created_at.as_str(), location.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .join("\t")
}
