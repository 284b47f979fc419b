use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;
use log::{debug, info, warn};

mod cli;

use cli::{Cli, Command, OutputFormat};
use ytsum::client::Reply;
use ytsum::config::{self, Config};
use ytsum::service::SummarizationService;
use ytsum::summarize::HuggingFaceSummarizer;
use ytsum::youtube::YouTubeCaptions;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let token_line = if config::api_token().is_some() {
        format!("  \x1b[32m✅\x1b[0m {}   set", config::TOKEN_ENV)
    } else {
        format!(
            "  \x1b[31m❌\x1b[0m {}   (not set, anonymous inference requests are heavily rate limited)",
            config::TOKEN_ENV
        )
    };

    format!(
        "\nENVIRONMENT:\n{token_line}\n\nConfig file: {}\nLogs are written to: {}",
        config::config_path().display(),
        log_dir().join("ytsum.log").display()
    )
}

fn build_service(config: &Config, client: &reqwest::Client, model: &str, chunk_size: usize) -> SummarizationService {
    let transcripts = YouTubeCaptions::with_base_url(client.clone(), config.youtube_url());
    let summarizer =
        HuggingFaceSummarizer::with_endpoint(client.clone(), config.inference_url(), model, config::api_token());

    SummarizationService::new(Arc::new(transcripts), Arc::new(summarizer))
        .with_language(config.language())
        .with_chunk_size(chunk_size)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring invalid config file: {e}");
        Config::default()
    });

    if cli.verbose {
        let config_path = config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        debug!("Effective config: {config:?}");
    }

    let client = reqwest::Client::builder().timeout(config.request_timeout()).build()?;

    match cli.command {
        Command::Serve { bind } => {
            let bind = bind.as_deref().unwrap_or(config.bind());
            let service = build_service(&config, &client, config.model(), config.chunk_size());
            eprintln!("Serving on http://{bind} (model {})", config.model());
            ytsum::server::serve(bind, service).await?;
        }
        Command::Client {
            url,
            max_words,
            server,
            format,
        } => {
            let server = server.as_deref().unwrap_or(config.server_url());
            if cli.verbose {
                eprintln!("Server: {server}\nURL: {url}\nWord limit: {max_words:?}");
            }

            let reply = ytsum::client::request_summary(&client, server, &url, max_words).await?;
            let rendered = match format {
                OutputFormat::Text => ytsum::output::render_text(&reply),
                OutputFormat::Json => ytsum::output::render_json(&reply),
            };

            match reply {
                Reply::Summary { .. } => println!("{rendered}"),
                Reply::Failed { details, .. } => {
                    eprintln!("{rendered}");
                    if let Some(details) = details.filter(|_| cli.verbose) {
                        eprintln!("Details: {details}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Run {
            url,
            max_words,
            chunk_size,
            model,
        } => {
            let model = model.as_deref().unwrap_or(config.model());
            let chunk_size = chunk_size.unwrap_or(config.chunk_size());
            if cli.verbose {
                eprintln!("Model: {model}\nChunk size: {chunk_size}\nWord limit: {max_words:?}");
            }

            let service = build_service(&config, &client, model, chunk_size);
            let summary = service.summarize(&url, max_words).await?;
            println!("{summary}");
        }
    }

    Ok(())
}
