//! CLI entrypoint for studio-inquiry
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use inquiry_application::{
    InquiryStore, NotificationGateway, SubmissionClient, SubmitInquiryUseCase,
};
use inquiry_infrastructure::{
    ConfigLoader, DisabledNotificationGateway, FileConfig, FileStoreBackend, HttpInquiryTransport,
    InMemoryInquiryStore, JsonlInquiryStore, ResendNotificationGateway, RestInquiryStore, Secrets,
};
use inquiry_presentation::{Cli, Command, ConsoleFormatter, SubmitArgs};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    match cli.command {
        Command::Serve { listen } => serve(config, listen).await,
        Command::Submit(args) => submit(config, args).await,
        Command::ShowConfig => {
            ConfigLoader::print_config_sources();
            println!();
            println!("{:#?}", config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(mut config: FileConfig, listen: Option<String>) -> Result<ExitCode> {
    if let Some(addr) = listen {
        config.server.listen = addr;
    }
    config.validate()?;

    let secrets = Secrets::from_env();

    // === Dependency Injection ===
    let store: Arc<dyn InquiryStore> = match config.store.backend {
        FileStoreBackend::Rest => {
            let url = config.store.url.as_deref().unwrap_or_default();
            let store = RestInquiryStore::new(url, &config.store.table, secrets.store_key()?);
            info!("Persisting inquiries to {}", store.endpoint());
            Arc::new(store)
        }
        FileStoreBackend::Jsonl => {
            let store = JsonlInquiryStore::open(&config.store.path)
                .with_context(|| format!("failed to open {}", config.store.path))?;
            info!("Persisting inquiries to {}", store.path().display());
            Arc::new(store)
        }
        FileStoreBackend::Memory => {
            warn!("Inquiries are kept in memory and will be lost on restart");
            Arc::new(InMemoryInquiryStore::new())
        }
    };

    let notifier: Arc<dyn NotificationGateway> = if config.notification.enabled {
        Arc::new(ResendNotificationGateway::with_endpoint(
            config.notification.endpoint.as_str(),
            secrets.notify_key()?,
        ))
    } else {
        warn!("Email notifications are disabled");
        Arc::new(DisabledNotificationGateway)
    };

    let use_case = SubmitInquiryUseCase::new(store, notifier, config.notification_settings());
    let app = inquiry_presentation::router(Arc::new(use_case), &config.server.path);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.server.listen))?;
    info!(
        "Inquiry handler listening on http://{}{}",
        config.server.listen, config.server.path
    );

    axum::serve(listener, app).await?;
    Ok(ExitCode::SUCCESS)
}

async fn submit(config: FileConfig, args: SubmitArgs) -> Result<ExitCode> {
    let language = args.language.unwrap_or(config.client.language);
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.client.endpoint.clone());

    let transport = HttpInquiryTransport::new(endpoint).with_anon_key(config.client.anon_key);
    let client = SubmissionClient::new(Arc::new(transport), language).with_form(args.to_form());

    let outcome = client.submit().await;
    print!("{}", ConsoleFormatter::format_outcome(&outcome, language));

    Ok(if outcome.is_sent() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
