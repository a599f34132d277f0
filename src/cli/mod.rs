pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Obfuscate asset bundles. Keep casual eyes out of your archives.
#[derive(Parser, Debug)]
#[command(name = "bundlecloak", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Obfuscation scheme override: "stream" or "offset"
    #[arg(long, global = true)]
    pub scheme: Option<String>,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default bundlecloak.toml in the current directory
    Init,

    /// Obfuscate a bundle file
    Encrypt {
        /// File to obfuscate
        file: String,
        /// Output path (default: <file>.cloak)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Restore an obfuscated bundle file to plain form
    Restore {
        /// File to restore
        file: String,
        /// Output path (default: <file> without its .cloak suffix)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the primary and fallback download URLs for a bundle
    Urls {
        /// Bundle file name as published on the remote hosts
        file_name: String,
    },
}
