//! Vaccine Dashboard CLI
//!
//! Drives the dashboard view-model outside a browser:
//! - Print the Chart.js configurations for the dashboard charts
//! - Inspect the selection state
//! - Replay scripted UI events
//! - Write the built-in layout or a default config file

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vaccine_dashboard::config::generate_default_config;
use vaccine_dashboard::{
    ChartJsRenderer, Config, Dashboard, DashboardSnapshot, EventHandler, EventOutcome,
    LoggingConfig, UiEvent, default_layout,
};

#[derive(Parser)]
#[command(name = "vaccine-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "View-state core of the vaccination system dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print Chart.js configurations for charts whose surfaces exist
    Charts {
        /// Only this chart (stock, chatbot, or a custom name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the initial selection state
    State,

    /// Apply a JSON array of UI events and show the result
    Replay {
        /// Path to the events file
        path: PathBuf,
    },

    /// Click a nav link
    SelectLink {
        /// Nav link id
        id: String,
    },

    /// Click a conversation list entry
    SelectEntry {
        /// Entry position, starting at 0
        index: usize,
    },

    /// Write the built-in layout as JSON
    Layout {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let json = match cli.format.as_str() {
        "json" => true,
        "table" => false,
        other => bail!("Unknown output format: {}", other),
    };

    match cli.command {
        Commands::Charts { name } => {
            let dashboard = build_dashboard(&config)?;
            let mut renderer = ChartJsRenderer::new();
            dashboard.render_charts(&mut renderer)?;

            let mut configs = renderer.into_configs();
            if let Some(name) = name {
                let chart = dashboard
                    .charts()
                    .get(&name)
                    .with_context(|| format!("No chart named '{}'", name))?;
                let canvas = chart.canvas.clone();
                configs.retain(|surface, _| *surface == canvas);
                if configs.is_empty() {
                    bail!("Surface '{}' for chart '{}' is not in the layout", canvas, name);
                }
            }
            println!("{}", serde_json::to_string_pretty(&configs)?);
        }

        Commands::State => {
            let dashboard = build_dashboard(&config)?;
            print_snapshot(&dashboard.snapshot(), json)?;
        }

        Commands::Replay { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read events from {:?}", path))?;
            let events: Vec<UiEvent> = serde_json::from_str(&content)
                .with_context(|| format!("Invalid event script {:?}", path))?;
            run_events(&config, &events, json)?;
        }

        Commands::SelectLink { id } => {
            run_events(&config, &[UiEvent::link(id)], json)?;
        }

        Commands::SelectEntry { index } => {
            run_events(&config, &[UiEvent::entry(index)], json)?;
        }

        Commands::Layout { output } => {
            write_output(output.as_deref(), &default_layout().to_json_pretty()?)?;
        }

        Commands::Config { output } => {
            write_output(output.as_deref(), &generate_default_config())?;
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("vaccine_dashboard={}", logging.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output, logs go to stderr
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_dashboard(config: &Config) -> anyhow::Result<Dashboard> {
    let tree = config.dashboard.load_layout()?;
    let charts = config.charts.build()?;
    let mut dashboard = Dashboard::from_tree(tree, &config.dashboard.selectors, charts)?;

    if let Some(page) = &config.dashboard.initial_page {
        if !dashboard.router().contains(page) {
            bail!("Initial page '{}' is not a nav link in the layout", page);
        }
        dashboard.handle(&UiEvent::link(page.clone()));
    }
    Ok(dashboard)
}

fn run_events(config: &Config, events: &[UiEvent], json: bool) -> anyhow::Result<()> {
    let mut dashboard = build_dashboard(config)?;
    let outcomes = dashboard.replay(events);

    if json {
        let out = serde_json::json!({
            "outcomes": outcomes,
            "state": dashboard.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (event, outcome) in events.iter().zip(&outcomes) {
            println!("{:<32} {}", describe_event(event), describe_outcome(outcome));
        }
        println!();
        print_snapshot(&dashboard.snapshot(), false)?;
    }
    Ok(())
}

fn describe_event(event: &UiEvent) -> String {
    match event {
        UiEvent::LinkClicked { id } => format!("link_clicked({})", id),
        UiEvent::EntryClicked { index } => format!("entry_clicked({})", index),
    }
}

fn describe_outcome(outcome: &EventOutcome) -> String {
    use vaccine_dashboard::RouteOutcome;

    match outcome {
        EventOutcome::Routed(RouteOutcome::Activated { link, panel }) => {
            format!("activated {} -> {}", link, panel)
        }
        EventOutcome::Routed(RouteOutcome::ActivatedWithoutPanel { link, target }) => {
            format!("activated {} (panel '{}' missing)", link, target)
        }
        EventOutcome::Routed(RouteOutcome::Cleared { requested }) => {
            format!("cleared (unknown link '{}')", requested)
        }
        EventOutcome::Selected { index, label } => format!("selected #{} {}", index, label),
        EventOutcome::Ignored { reason } => format!("ignored: {}", reason),
    }
}

fn print_snapshot(snapshot: &DashboardSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("{:<8} {:<20} {:<20} {}", "", "LINK", "TARGET", "ACTIVE");
    for link in &snapshot.links {
        println!("{:<8} {:<20} {:<20} {}", "nav", link.id, link.target, mark(link.active));
    }
    for panel in &snapshot.panels {
        println!("{:<8} {:<20} {:<20} {}", "page", panel.id, "", mark(panel.active));
    }
    for entry in &snapshot.entries {
        println!("{:<8} {:<20} {:<20} {}", "entry", entry.label, entry.index, mark(entry.active));
    }
    println!();
    println!("Header: {}", snapshot.header);
    Ok(())
}

fn mark(active: bool) -> &'static str {
    if active { "*" } else { "" }
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Wrote {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
