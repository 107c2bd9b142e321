//! Commands enum and subcommands.

use clap::Subcommand;

/// Available commands for the media catalog.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the catalog HTTP API until Ctrl+C
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "MEDIA_PORT", default_value = "5080")]
        port: u16,
        /// Interface to bind
        #[arg(long, env = "MEDIA_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Allowed CORS origin (repeatable; all origins when omitted)
        #[arg(
            long = "allow-origin",
            env = "MEDIA_ALLOWED_ORIGINS",
            value_delimiter = ','
        )]
        allow_origins: Vec<String>,
    },

    /// Inspect or seed the media type reference table
    MediaTypes {
        #[command(subcommand)]
        command: MediaTypeCommand,
    },
}

/// Media type subcommands.
#[derive(Subcommand)]
pub enum MediaTypeCommand {
    /// List every media type
    List,
    /// Insert media types that are not already present
    Seed {
        /// Names to insert
        #[arg(required = true)]
        names: Vec<String>,
    },
}
