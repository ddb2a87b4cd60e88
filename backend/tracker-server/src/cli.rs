use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tracker-server")]
#[command(about = "Server-rendered project and step tracker")]
#[command(version)]
pub struct Cli {
    /// Load templates from the development asset directory instead of the
    /// installed one
    #[arg(long)]
    pub dev: bool,

    /// Override the configured listening port
    #[arg(long)]
    pub port: Option<u16>,
}
