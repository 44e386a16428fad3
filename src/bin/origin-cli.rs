use std::net::IpAddr;

use clap::{Parser, Subcommand};
use request_origin::{is_local, normalize_ip, ConnectionAddrs};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "origin-cli")]
#[command(about = "Query and evaluate request origin rules", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a running server how it sees this client
    Whoami,
    /// Print the canonical form of an address
    Normalize { ip: IpAddr },
    /// Evaluate the same-host rule for a local/remote pair
    IsLocal {
        local: IpAddr,
        /// Omit for a transport without IP addressing
        remote: Option<IpAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Whoami => {
            let res = reqwest::Client::new()
                .get(format!("{}/origin", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        command => {
            if let Some(output) = evaluate_offline(&command) {
                println!("{}", output);
            }
        }
    }

    Ok(())
}

/// Output of subcommands that need no server.
fn evaluate_offline(command: &Commands) -> Option<String> {
    match *command {
        Commands::Normalize { ip } => Some(normalize_ip(ip).to_string()),
        Commands::IsLocal { local, remote } => {
            Some(is_local(&ConnectionAddrs::new(Some(local), remote)).to_string())
        }
        Commands::Whoami => None,
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
