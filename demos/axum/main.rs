use std::env;
use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use secfetch_rs::{
    Enforcement, EnforcementError, ProtectLayer, ProtectLogOnlyLayer, TracingLogger,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn account() -> &'static str {
    "Your account details"
}

async fn transfer() -> &'static str {
    "Transfer accepted"
}

async fn public_feed() -> &'static str {
    "Public data anyone may embed"
}

fn enforcement_from_env() -> Result<Enforcement, EnforcementError> {
    match env::var("SECFETCH_ENFORCEMENT") {
        Ok(value) => value.parse(),
        Err(_) => Ok(Enforcement::default()),
    }
}

fn build_app(enforcement: Enforcement) -> Router {
    let protected = Router::new()
        .route("/account", get(account))
        .route("/transfer", post(transfer));

    let protected = match enforcement {
        Enforcement::Enforce => protected.layer(ProtectLayer::new()),
        Enforcement::LogOnly => protected.layer(ProtectLogOnlyLayer::new(TracingLogger::new())),
    };

    // Registered after the layer, so cross-site callers can reach it.
    protected.route("/public", get(public_feed))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum=info,secfetch_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let enforcement = enforcement_from_env()?;
    let app = build_app(enforcement);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!(%addr, %enforcement, "axum fetch metadata example listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
