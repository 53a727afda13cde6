use std::path::PathBuf;

use clap::Parser;

/// despacho voice order gateway
#[derive(Debug, Parser)]
#[command(name = "despacho", about = "Turns spoken sales orders into structured order records")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "despacho.toml", env = "DESPACHO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "DESPACHO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
