//! Roameo CLI
//!
//! Command-line interface for Roameo:
//! - Plan a trip and print the dashboard
//! - Check server health
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use roameo::map::{MapSettings, MapView};
use roameo::planner::{fetch_plan, HttpPlanBackend};
use roameo::render::{Card, Dashboard, Section, Tone};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "roameo-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan a trip from a single prompt")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Roameo server URL
    #[arg(long, default_value = "http://localhost:8085", global = true)]
    pub api_url: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the planner and print the dashboard
    Plan {
        /// Free-text travel request
        #[arg(required = true)]
        prompt: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Seconds to wait for the plan
        #[arg(long, default_value = "180")]
        timeout: u64,
    },

    /// Show server status
    Health,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            prompt,
            format,
            timeout,
        } => {
            let prompt = prompt.join(" ");
            let backend =
                HttpPlanBackend::for_server(&cli.api_url, Duration::from_secs(timeout))?;

            let result = fetch_plan(&backend, &prompt).await;
            let dashboard = Dashboard::from_result(Some(&result), &MapSettings::default());

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
                OutputFormat::Text => print!("{}", dashboard_text(&dashboard)),
            }

            if dashboard.error.is_some() {
                std::process::exit(1);
            }
        }

        Commands::Health => {
            let client = reqwest::Client::new();
            let response = client
                .get(format!("{}/health", cli.api_url.trim_end_matches('/')))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!(
                        "Roameo v{}",
                        health["version"].as_str().unwrap_or(env!("CARGO_PKG_VERSION"))
                    );
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Planner: {}", health["planner_url"].as_str().unwrap_or("-"));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Roameo at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin roameo");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = roameo::config::generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", config);
            }
        }
    }

    Ok(())
}

/// Plain-text rendering of the whole dashboard
fn dashboard_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    if let Some(error) = &dashboard.error {
        out.push_str(&format!("Error: {}\n", error));
        return out;
    }

    if let Some(trip) = &dashboard.trip {
        let label = trip.label();
        if !label.is_empty() {
            out.push_str(&format!("{}\n\n", label));
        }
    }

    if let Some(summary) = &dashboard.summary {
        out.push_str(&format!("{}\n", summary));
    }

    for section in &dashboard.sections {
        out.push('\n');
        out.push_str(&section_text(section));
    }

    if dashboard.is_empty() {
        out.push_str("Nothing planned.\n");
    }

    out
}

fn section_text(section: &Section) -> String {
    let mut out = format!("{}\n{}\n", section.title, "-".repeat(40));

    for card in &section.cards {
        out.push_str(&card_text(card));
    }

    if let Some(map) = &section.map {
        out.push_str(&map_text(map));
    }

    out
}

fn card_text(card: &Card) -> String {
    let mut out = format!("* {}\n", card.title);

    for line in &card.subtitle {
        match line.tone {
            Tone::Strong => out.push_str(&format!("  {}\n", line.text.to_uppercase())),
            _ => out.push_str(&format!("  {}\n", line.text)),
        }
    }
    for line in &card.description {
        out.push_str(&format!("  {}\n", line));
    }
    if let Some(link) = &card.link {
        out.push_str(&format!("  {}: {}\n", link.label, link.href));
    }

    out
}

fn map_text(map: &MapView) -> String {
    let mut out = format!(
        "Map: centered on {:.4}, {:.4} (zoom {})\n",
        map.center.lat, map.center.lng, map.zoom
    );

    for marker in &map.markers {
        out.push_str(&format!(
            "  @ {:.4}, {:.4}  {}",
            marker.position.lat, marker.position.lng, marker.popup.title
        ));
        if let Some(address) = &marker.popup.address {
            out.push_str(&format!(" ({})", address));
        }
        out.push('\n');
    }

    out
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
