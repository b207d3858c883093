mod auth;
mod config;
mod converters;
mod error;
mod llm_client;
mod logging;
mod model_checks;
mod model_router;
mod models;
mod persona;
mod request_id;
mod router;

use clap::Parser;
use config::Config;
use model_router::{ChatRouter, Provider};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(name = "tutor-router")]
#[command(about = "Routes study-companion chat requests to the configured AI providers")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Path to config file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Service token required on /chat
    #[arg(short, long)]
    token: Option<String>,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Also write logs to this file, capped at 10 MiB
    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,

    /// Ping every configured provider and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    let config = Config::load(&args.config)?;
    for provider in Provider::ALL {
        if provider.params(&config.providers).key().is_none() {
            warn!(
                "{} is not configured, {} models will be rejected",
                provider.key_env(),
                provider.name()
            );
        }
    }

    let mut client_builder = reqwest::Client::builder();
    if let Some(proxy) = &args.proxy {
        client_builder = client_builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    let http_client = Arc::new(client_builder.build()?);

    let chat_router = Arc::new(ChatRouter::new(
        Arc::new(config.providers),
        llm_client::LlmClient::new(http_client),
    ));

    if args.check {
        model_checks::perform_provider_checks(&chat_router).await;
        return Ok(());
    }

    let app_state = auth::AppState {
        router: chat_router,
        default_model: config.default_model,
        token: args.token,
    };
    let app = router::build_app(app_state);

    let bind_address = format!("{}:{}", args.ip, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
