use actix_web::{web, App, HttpServer};
use anyhow::Context;
use kaspro::billing::BillingCalculator;
use kaspro::config::{Config, LogFormat};
use kaspro::middleware::{json_config, RequestId};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("kaspro={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Kaspro billing engine");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        currency = %config.billing.currency,
        vat_inclusive = config.billing.vat_inclusive,
        tax_rules = config.billing.taxes.len(),
        "Billing rules loaded"
    );

    let calculator = web::Data::new(BillingCalculator::new(config.billing.clone()));
    let max_payload_bytes = config.server.max_payload_bytes;
    let bind_address = config.server.bind_address();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(calculator.clone())
            .app_data(json_config(max_payload_bytes))
            .configure(kaspro::configure_routes)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
