//! SJL CLI - generate springshed tables and read IoT sensor data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sjl-cli",
    version,
    about = "Springshed synthetic data and sensor toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sjl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sjl_cmd::run(cli.command).await
}
