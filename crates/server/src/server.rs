//! Server startup and shutdown.

use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use bridge_executor::Registry;

use crate::config::ServerConfig;
use crate::context::AppContext;
use crate::error::ServerError;
use crate::router::api_router;

/// In-flight requests get this long to finish after Ctrl-C.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Open the registry described by `config` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;
    let addr = config.bind_addr()?;
    let location = config.database_location()?;

    if config.uses_default_secret() && !config.debug {
        tracing::warn!(
            target: "bridge::server",
            "using the default secret key; set SECRET_KEY in production"
        );
    }

    let registry = tokio::task::spawn_blocking(move || Registry::open_location(location))
        .await
        .map_err(|e| ServerError::Io(std::io::Error::other(e)))??;
    tracing::info!(target: "bridge::server", database = %config.database_url, "registry opened");

    let enable_ssl = config.enable_ssl;
    let cert = config.ssl_cert_file.clone();
    let key = config.ssl_key_file.clone();
    let app = api_router(AppContext::new(registry, config));

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    if enable_ssl {
        let tls = RustlsConfig::from_pem_file(&cert, &key)
            .await
            .map_err(ServerError::Tls)?;
        tracing::info!(target: "bridge::server", %addr, "listening (https)");
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    } else {
        tracing::info!(target: "bridge::server", %addr, "listening (http)");
        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    }

    tracing::info!(target: "bridge::server", "server stopped");
    Ok(())
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "bridge::server", error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!(target: "bridge::server", "shutting down");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}
