use anyhow::Result;
use clap::{Parser, Subcommand};
use lsbstego_cli::{commands, KeyArgs};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lsbstego")]
#[command(about = "lsbstego - Hide messages in the low bits of PNG/BMP images", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random 256-bit payload key
    Keygen {
        /// Write the hex key to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Hide a message in a cover image
    Hide {
        /// Cover image (PNG or BMP)
        #[arg(short, long)]
        cover: String,

        /// Output stego image (PNG)
        #[arg(short, long)]
        output: String,

        /// Message text
        #[arg(short, long)]
        message: Option<String>,

        /// Read the message from a file (`-` for stdin)
        #[arg(long)]
        message_file: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Reveal a message hidden in a stego image
    Reveal {
        /// Stego image (PNG or BMP)
        #[arg(short, long)]
        input: String,

        /// Write the message to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        key: KeyArgs,
    },

    /// Report capacity and whether an image carries a hidden payload
    Inspect {
        /// Image to inspect
        #[arg(short, long)]
        input: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over --verbose when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Keygen { output } => commands::keygen::execute(output.as_deref()),

        Commands::Hide {
            cover,
            output,
            message,
            message_file,
            key,
        } => commands::hide::execute(
            &cover,
            &output,
            message.as_deref(),
            message_file.as_deref(),
            &key.source(),
        ),

        Commands::Reveal { input, output, key } => {
            commands::reveal::execute(&input, output.as_deref(), &key.source())
        }

        Commands::Inspect { input, json } => commands::inspect::execute(&input, json),
    }
}
