mod cli;
mod commands;
mod config;
mod logging;
mod transport;

use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use guardrail_web::ApiClient;
use transport::ReqwestTransport;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = config::init_cli_config();
    logging::init();
    tracing::debug!(api_base = %config.api_base, "configuration loaded");

    let api = ApiClient::new(ReqwestTransport::new()?, config.api_base);
    let output = commands::execute(&api, args.command, args.json).await?;
    println!("{output}");

    Ok(())
}
