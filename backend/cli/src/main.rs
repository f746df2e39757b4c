mod config;
mod output;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use verifact_core::{
    AnalysisStep, ImageAttachment, VerifactError, VerificationRequest, Verifier,
    EVALUATING_DELAY, SEARCHING_DELAY,
};
use verifact_gateway::GatewayState;
use verifact_verifier::{mime_detect, GeminiVerifier};

use config::Config;

#[derive(Parser)]
#[command(name = "verifact")]
#[command(about = "VeriFact — source-backed credibility checks for text and images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the VeriFact HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Verify a text snippet and/or an image from the terminal
    Verify {
        /// Text to verify; may be empty when --image is given
        #[arg(default_value = "")]
        text: String,
        /// Path to an image file to include in the check
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Show server health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    verifact_logging::init_logger(config.log_dir.as_deref(), &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Verify { text, image } => {
            run_verify(config, text, image).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("VeriFact is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

fn build_verifier(config: &Config) -> Result<GeminiVerifier> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        bail!(VerifactError::Config("GEMINI_API_KEY is not set".into()));
    };
    let mut verifier = GeminiVerifier::new(api_key);
    if let Some(model) = &config.gemini_model {
        verifier = verifier.with_model(model);
    }
    Ok(verifier)
}

async fn run_server(config: Config) -> Result<()> {
    let verifier = build_verifier(&config)?;

    info!(
        port = config.port,
        bind = %config.bind_address,
        "Starting VeriFact server"
    );

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;
    let state = GatewayState {
        verifier: Arc::new(verifier),
    };
    verifact_gateway::start_server(addr, state).await
}

async fn run_verify(config: Config, text: String, image: Option<PathBuf>) -> Result<()> {
    let mut request = VerificationRequest::text(text);
    if let Some(path) = image {
        let data = std::fs::read(&path)
            .with_context(|| format!("failed to read image {}", path.display()))?;
        let mime_type = mime_detect::detect_image_mime(&path);
        if !mime_detect::is_image(mime_type) {
            bail!("{} does not look like an image file", path.display());
        }
        request = request.with_image(ImageAttachment {
            data,
            mime_type: mime_type.to_string(),
        });
    }
    if !request.has_content() {
        bail!(VerifactError::EmptyRequest);
    }

    let verifier = build_verifier(&config)?;

    // Cosmetic stepper: fixed delays, never coupled to real call progress.
    let stepper = tokio::spawn(async {
        eprintln!("{}", AnalysisStep::Scanning.message());
        tokio::time::sleep(SEARCHING_DELAY).await;
        eprintln!("{}", AnalysisStep::Searching.message());
        tokio::time::sleep(EVALUATING_DELAY - SEARCHING_DELAY).await;
        eprintln!("{}", AnalysisStep::Evaluating.message());
    });

    let result = verifier.verify(&request).await;
    stepper.abort();

    match result {
        Ok(result) => {
            output::print_result(&result);
            Ok(())
        }
        Err(err) => bail!(err),
    }
}
