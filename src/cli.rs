use clap::{Parser, Subcommand};

use ytsum::client::parse_word_limit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "YouTube transcript summarizer",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show configuration and request details on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP summarization server
    Serve {
        /// Address to listen on (default from config, else 127.0.0.1:5000)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Ask a running server to summarize a video
    Client {
        /// YouTube video URL
        url: String,

        /// Word limit for the summary (at least 50, in steps of 50)
        #[arg(short, long, value_parser = parse_word_limit)]
        max_words: Option<usize>,

        /// Server base URL (default from config, else http://127.0.0.1:5000)
        #[arg(short, long)]
        server: Option<String>,

        /// Output format: text (default), json
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Summarize a video in-process, without a server
    Run {
        /// YouTube video URL
        url: String,

        /// Word limit for the summary
        #[arg(short, long)]
        max_words: Option<usize>,

        /// Words per chunk sent to the model
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Summarization model on the inference endpoint
        #[arg(long)]
        model: Option<String>,
    },
}
