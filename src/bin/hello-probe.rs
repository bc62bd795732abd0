use clap::{Parser, Subcommand};
use hello_service::RouteTable;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hello-probe")]
#[command(about = "Post-deploy smoke check for hello-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080", env = "HELLO_PROBE_URL")]
    url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Check every endpoint (default)
    All,
    /// GET /
    Root,
    /// GET /health
    Health,
    /// GET /version
    Version,
}

impl Commands {
    fn paths(self) -> Vec<String> {
        match self {
            Commands::All => RouteTable::standard()
                .routes()
                .iter()
                .filter(|r| r.method == reqwest::Method::GET)
                .map(|r| r.path.clone())
                .collect(),
            Commands::Root => vec!["/".into()],
            Commands::Health => vec!["/health".into()],
            Commands::Version => vec!["/version".into()],
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let mut failed = false;
    for path in cli.command.unwrap_or(Commands::All).paths() {
        if let Err(e) = probe(&client, base, &path).await {
            eprintln!("FAIL {path}: {e}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn probe(
    client: &reqwest::Client,
    base: &str,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let res = client.get(format!("{base}{path}")).send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(format!("status {status}, body {body:?}").into());
    }

    println!("OK   {path} [{}] {body}", status.as_u16());
    Ok(())
}
