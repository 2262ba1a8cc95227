//! Management CLI for the fixture corpus.

use clap::{Parser, Subcommand};
use serde_json::Value;

use reticulum_fixtures::findings;

#[derive(Parser)]
#[command(name = "fixtures-cli")]
#[command(about = "Management CLI for the Reticulum fixture corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expected-findings manifest as JSON
    Findings,
    /// Smoke-check a running api-gateway fixture
    Probe {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Findings => {
            let findings = findings::expected_findings();
            let manifest = serde_json::json!({
                "scan_summary": findings::summarize(&findings),
                "findings": findings,
            });
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Commands::Probe { url } => {
            let client = reqwest::Client::new();
            for path in ["/debug/config", "/api/data"] {
                let res = client.get(format!("{}{}", url, path)).send().await?;
                print_response(path, res).await?;
            }
        }
    }

    Ok(())
}

async fn print_response(
    path: &str,
    res: reqwest::Response,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: {} returned status {}", path, status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{} {}", path, serde_json::to_string_pretty(&json)?);
    Ok(())
}
