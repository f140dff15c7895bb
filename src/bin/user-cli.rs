use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "user-cli")]
#[command(about = "Command-line client for the user service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user
    Create { name: String },
    /// Fetch a user by id
    Get { id: String },
    /// Rename a user
    Update { id: String, name: String },
    /// Delete a user
    Delete { id: String },
    /// Check service status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Create { name } => {
            client
                .post(format!("{}/users", base))
                .json(&json!({ "name": name }))
                .send()
                .await?
        }
        Commands::Get { id } => client.get(format!("{}/users/{}", base, id)).send().await?,
        Commands::Update { id, name } => {
            client
                .put(format!("{}/users/{}", base, id))
                .json(&json!({ "name": name }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/users/{}", base, id))
                .send()
                .await?
        }
        Commands::Status => client.get(format!("{}/status", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Err(format!("service returned status {}", status).into());
    }

    if status == reqwest::StatusCode::NO_CONTENT {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
