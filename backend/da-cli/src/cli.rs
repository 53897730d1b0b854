use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "da")]
#[command(about = "Data anonymization console for the Users roster")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Login username
    #[arg(long, short = 'u', global = true, default_value = "")]
    pub username: String,

    /// Login password
    #[arg(long, short = 'p', global = true, default_value = "")]
    pub password: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
