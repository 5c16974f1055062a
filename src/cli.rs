use clap::{Parser, Subcommand};

/// Monetra admin key service for the storefront payment module
#[derive(Parser)]
#[command(name = "monetra-admin", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the admin HTTP service
    Serve {
        /// Port to bind (defaults to MONETRA_ADMIN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Delete the legacy username/password config entries without generating a key
    PurgeLegacy,
}
