use clap::Parser;
use similarity_bridge::core::ConfigProvider;
use similarity_bridge::utils::{logger, validation::Validate};
use similarity_bridge::{server, BridgeHandler, CliConfig, ReqwestUpstream};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting similarity-bridge");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Forwarding guesses to {} (reference word: {})",
        settings.upstream_endpoint(),
        settings.reference_word()
    );

    let listener = TcpListener::bind(settings.listen_addr()).await?;
    let upstream = ReqwestUpstream::new(settings.upstream_endpoint());
    let handler = BridgeHandler::new(upstream, settings.reference_word());

    if let Err(e) = server::serve(listener, handler).await {
        tracing::error!("❌ Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
