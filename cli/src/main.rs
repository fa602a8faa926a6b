use anyhow::Context;
use clap::{Parser, Subcommand};
use ibge_core::{ClientConfig, IbgeClient, UreqTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ibge")]
#[command(about = "Query the IBGE localidades API for states and districts")]
#[command(version)]
struct Cli {
    /// Base URL of the localidades API [default: $IBGE_BASE_URL, then the public API]
    #[arg(long)]
    base_url: Option<String>,

    /// Print the HTTP status code instead of the body
    #[arg(long)]
    status: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a state by its two-letter code (e.g. SP)
    Estado { sigla: String },
    /// Look up a district by its numeric identifier
    Distrito { id: u32 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(&Cli::parse())?;
    println!("{output}");
    Ok(())
}

/// Resolve the configuration, perform the query and return what to print.
fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.base_url {
        Some(url) => ClientConfig::new(url.as_str()),
        None => ClientConfig::from_env(),
    };
    tracing::debug!(base_url = %config.base_url, "resolved IBGE base URL");
    let client = IbgeClient::from_config(&config, UreqTransport::new())?;

    let output = match (&cli.command, cli.status) {
        (Command::Estado { sigla }, false) => client
            .consultar_estado(sigla)
            .with_context(|| format!("querying state {sigla}"))?,
        (Command::Estado { sigla }, true) => client
            .status_estado(sigla)
            .with_context(|| format!("querying state {sigla}"))?
            .to_string(),
        (Command::Distrito { id }, false) => client
            .consultar_distrito(*id)
            .with_context(|| format!("querying district {id}"))?,
        (Command::Distrito { id }, true) => client
            .status_distrito(*id)
            .with_context(|| format!("querying district {id}"))?
            .to_string(),
    };
    Ok(output)
}
