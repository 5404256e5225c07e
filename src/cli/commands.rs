use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::ApplicationStatus;
use crate::tui;

#[derive(Parser)]
#[command(name = "admitdesk")]
#[command(version = "0.1.0")]
#[command(about = "Terminal dashboard for tracking prospective applicants", long_about = None)]
pub struct Cli {
    /// Base URL of the admin API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token attached to every API request
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Name recorded as the author of notes and communications
    #[arg(long, value_name = "NAME")]
    pub operator: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check API health and print funnel statistics
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.api_url, cli.token, cli.operator);
    let client = ApiClient::new(config.api_url.clone(), config.token.clone());

    match &cli.command {
        Some(Commands::Stats) => show_stats(&client),
        None => tui::run_interactive(client, config.operator),
    }
}

fn show_stats(client: &ApiClient) -> Result<()> {
    let health = client.health()?;
    println!("API {} is {}", client.base_url(), health.status);

    let students = client.list_students()?;

    println!();
    println!("Admissions Funnel");
    println!("=================");
    println!("Total students: {}", students.len());
    for status in ApplicationStatus::ALL {
        let count =
            students.iter().filter(|s| s.application_status == Some(status)).count();
        println!("  {}: {}", status.label(), count);
    }
    let unset = students.iter().filter(|s| s.application_status.is_none()).count();
    if unset > 0 {
        println!("  (no status): {}", unset);
    }

    println!();
    println!("Engagement flags");
    println!(
        "  Not contacted 7d: {}",
        students.iter().filter(|s| s.not_contacted_7days).count()
    );
    println!("  High intent: {}", students.iter().filter(|s| s.high_intent).count());
    println!(
        "  Needs essay help: {}",
        students.iter().filter(|s| s.needs_essay_help).count()
    );

    Ok(())
}
