//! Serve command implementation

use super::{build_engine, exit_code_for, EXIT_OK};
use crate::config::RedactorConfig;
use crate::server;
use clap::Args;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(&self, config: &RedactorConfig) -> anyhow::Result<i32> {
        let mut server_config = config.server.clone();
        if let Some(ref host) = self.host {
            server_config.host = host.clone();
        }
        if let Some(port) = self.port {
            server_config.port = port;
        }

        let engine = match build_engine(config) {
            Ok(engine) => Arc::new(engine),
            Err(code) => return Ok(code),
        };

        match server::serve(engine, &server_config, shutdown_signal()).await {
            Ok(()) => Ok(EXIT_OK),
            Err(e) => {
                tracing::error!(error = %e, "Server failed");
                eprintln!("Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT (Ctrl+C), shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
