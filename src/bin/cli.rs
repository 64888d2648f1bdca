//! Barbershop CLI
//!
//! Command-line interface for a running Barbershop server:
//! - Show the catalog
//! - Submit a (simulated) booking
//! - Print the analytics summary
//! - Check status
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barbershop-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Barbershop server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List services, stylists and time slots
    Catalog,

    /// Submit a booking
    Book {
        /// Service name, e.g. "Классическая стрижка"
        #[arg(long)]
        service: Option<String>,
        /// Stylist name
        #[arg(long)]
        stylist: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Time slot, e.g. 14:00
        #[arg(long)]
        time: Option<String>,
    },

    /// Show booking analytics
    Analytics,

    /// Show server status
    Status,

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
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Catalog => {
            let catalog = get_json(&client, &format!("{}/api/v1/catalog", cli.api_url)).await?;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                print_catalog(&catalog);
            }
        }

        Commands::Book {
            service,
            stylist,
            date,
            time,
        } => {
            let body = serde_json::json!({
                "service": service,
                "stylist": stylist,
                "date": date,
                "time": time,
            });

            let response = client
                .post(format!("{}/api/v1/bookings", cli.api_url))
                .json(&body)
                .send()
                .await
                .with_context(|| format!("Cannot connect to Barbershop at {}", cli.api_url))?;

            let status = response.status();
            let data: serde_json::Value = response.json().await?;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else if status.is_success() {
                println!("{}", data["message"].as_str().unwrap_or("Booking accepted"));
                let booking = &data["booking"];
                println!(
                    "  {} / {} / {} {}",
                    booking["service"].as_str().unwrap_or("-"),
                    booking["stylist"].as_str().unwrap_or("-"),
                    booking["date"].as_str().unwrap_or("-"),
                    booking["time"].as_str().unwrap_or("-"),
                );
            } else {
                eprintln!(
                    "Booking rejected ({}): {}",
                    status,
                    data["error"]["message"].as_str().unwrap_or("unknown error")
                );
                std::process::exit(1);
            }
        }

        Commands::Analytics => {
            let data = get_json(&client, &format!("{}/api/v1/analytics", cli.api_url)).await?;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_analytics(&data);
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if cli.format == OutputFormat::Json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "Barbershop v{}",
                        health["version"].as_str().unwrap_or(env!("CARGO_PKG_VERSION"))
                    );
                    println!();
                    println!(
                        "Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Catalog: {} services, {} stylists",
                        health["services"].as_u64().unwrap_or(0),
                        health["stylists"].as_u64().unwrap_or(0)
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Barbershop at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin barbershop");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = barbershop::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn get_json(client: &reqwest::Client, url: &str) -> anyhow::Result<serde_json::Value> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Cannot connect to {}", url))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        bail!("Request failed ({}): {}", status, text);
    }

    Ok(response.json().await?)
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

fn rows(value: &serde_json::Value) -> &[serde_json::Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

fn print_catalog(catalog: &serde_json::Value) {
    println!("Services:");
    println!("{:<4} {:<24} {:<10} {}", "ID", "Name", "Price", "Duration");
    println!("{}", "-".repeat(50));
    for service in rows(&catalog["services"]) {
        println!(
            "{:<4} {:<24} {:<10} {}",
            service["id"].as_u64().unwrap_or(0),
            service["name"].as_str().unwrap_or("-"),
            service["price"].as_str().unwrap_or("-"),
            service["duration"].as_str().unwrap_or("-"),
        );
    }

    println!();
    println!("Stylists:");
    println!("{:<4} {:<20} {:<10} {}", "ID", "Name", "Experience", "Specialty");
    println!("{}", "-".repeat(50));
    for stylist in rows(&catalog["stylists"]) {
        println!(
            "{:<4} {:<20} {:<10} {}",
            stylist["id"].as_u64().unwrap_or(0),
            stylist["name"].as_str().unwrap_or("-"),
            stylist["experience"].as_str().unwrap_or("-"),
            stylist["specialty"].as_str().unwrap_or("-"),
        );
    }

    let slots: Vec<&str> = rows(&catalog["time_slots"])
        .iter()
        .filter_map(|s| s.as_str())
        .collect();
    println!();
    println!("Time slots: {}", slots.join(", "));
}

fn print_analytics(data: &serde_json::Value) {
    let totals = &data["totals"];
    println!("Всего записей: {}", totals["total"].as_u64().unwrap_or(0));
    println!(
        "Завершено:     {} ({})",
        totals["completed"].as_u64().unwrap_or(0),
        totals["completed_label"].as_str().unwrap_or("—")
    );
    println!(
        "Отменено:      {} ({})",
        totals["cancelled"].as_u64().unwrap_or(0),
        totals["cancelled_label"].as_str().unwrap_or("—")
    );
    println!("Активные:      {}", totals["active"].as_u64().unwrap_or(0));

    let timeline = rows(&data["timeline"]);
    if !timeline.is_empty() {
        println!();
        println!("{:<8} | {:<10} | {:<10} | {}", "Date", "Завершено", "Отменено", "Активно");
        println!("{}", "-".repeat(46));
        for row in timeline {
            println!(
                "{:<8} | {:<10} | {:<10} | {}",
                row["date"].as_str().unwrap_or("-"),
                row["Завершено"].as_u64().unwrap_or(0),
                row["Отменено"].as_u64().unwrap_or(0),
                row["Активно"].as_u64().unwrap_or(0),
            );
        }
    }

    let hourly = rows(&data["hourly"]);
    if !hourly.is_empty() {
        println!();
        println!("{:<8} | {}", "Time", "Записи");
        println!("{}", "-".repeat(20));
        for row in hourly {
            println!(
                "{:<8} | {}",
                row["time"].as_str().unwrap_or("-"),
                row["Записи"].as_u64().unwrap_or(0),
            );
        }
    }

    let stylists = rows(&data["stylists"]);
    if !stylists.is_empty() {
        println!();
        println!("Загруженность мастеров:");
        for row in stylists {
            println!(
                "  {:<20} {:>4}  {}",
                row["name"].as_str().unwrap_or("-"),
                row["total_bookings"].as_u64().unwrap_or(0),
                row["completed_label"].as_str().unwrap_or("-"),
            );
        }
    }
}
