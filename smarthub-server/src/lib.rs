use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tokio::net::TcpListener;

use crate::app::{AppContext, create_app};
use crate::configs::Settings;

pub mod app;
pub mod configs;
pub mod docs;
pub mod errors;
pub mod handles;
pub mod models;
pub mod repositories;
pub mod services;

pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let context = AppContext::from_settings(settings).await?;
    let app = create_app(context);

    let ip_addr = settings
        .server
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("invalid server host {}", settings.server.host))?;

    let address = SocketAddr::from((ip_addr, settings.server.port));

    let listener = TcpListener::bind(&address).await?;

    tracing::info!("listening on {:?}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
