// CRPT Submission Client - Demo Entry Point
//
// Wires the rate-limited client together and submits one sample
// document, for manual testing against the registry (or a local stand-in
// via --url).

use anyhow::{Context, Result};
use clap::Parser;
use crpt_api::{Document, HttpTransport, SubmissionClient, SubmissionConfig};
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Rate-limited CRPT registry submission client
#[derive(Parser, Debug)]
#[command(name = "crpt")]
#[command(version = "0.1.0")]
#[command(about = "Submit a signed document to the CRPT registry", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Maximum submissions per window
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Window duration in seconds
    #[arg(long, default_value_t = 60)]
    window_secs: u64,

    /// Override the registry endpoint (for local testing)
    #[arg(long)]
    url: Option<String>,

    /// Participant INN
    #[arg(long, default_value = "9999999999")]
    participant_inn: String,

    /// Document identifier
    #[arg(long, default_value = "333")]
    doc_id: String,

    /// Detached signature over the document
    #[arg(long, default_value = "signature")]
    signature: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(filter.into())
                .from_env_lossy(),
        )
        .init();

    let config = SubmissionConfig::new(args.limit, Duration::from_secs(args.window_secs))
        .context("invalid quota configuration")?;

    let transport = match &args.url {
        Some(url) => HttpTransport::with_url(url),
        None => HttpTransport::new(),
    };
    info!(url = transport.url(), limit = args.limit, "starting submission client");

    let mut client =
        SubmissionClient::new(config, transport).context("failed to start submission client")?;

    let document = Document {
        participant_inn: args.participant_inn.clone(),
        doc_id: args.doc_id.clone(),
        owner_inn: args.participant_inn.clone(),
        producer_inn: args.participant_inn,
        production_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        doc_type: "ProductDescription".to_string(),
        import_request: true,
    };

    match client.submit(document, args.signature).await {
        Ok(()) => info!(doc_id = %args.doc_id, "document accepted by registry"),
        Err(e) => {
            error!(doc_id = %args.doc_id, "submission failed: {}", e);
            client.shutdown();
            return Err(e.into());
        }
    }

    client.shutdown();
    Ok(())
}
