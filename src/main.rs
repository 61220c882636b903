use std::net::TcpListener;

use env_logger::Env;
use furniture_extractor::{
    configuration::get_configuration,
    startup::{build_extractor, run},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on {}", address);

    let extractor = build_extractor(&configuration)?;

    run(
        listener,
        extractor,
        configuration.application.max_body_bytes,
    )?
    .await?;

    Ok(())
}
