use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "dailywall")]
#[command(about = "Daily wallpaper proxy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Server(ServerArgs),
    /// Resolve one wallpaper and print its info as JSON
    Info(InfoArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServerArgs {
    /// Address to bind the HTTP server to (overrides server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Market code, e.g. ja-JP
    #[arg(long)]
    pub region: Option<String>,
    /// Calendar date, e.g. 2024-01-01
    #[arg(long)]
    pub date: Option<String>,
    /// Resolution label, e.g. 4k or mobile
    #[arg(long)]
    pub dpi: Option<String>,
}
