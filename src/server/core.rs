use axum::Router;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::server::router::build_router;
use crate::server::state::AppState;

pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl Server {
    /// Binds the listener and builds the router. Nothing is served until `start`.
    pub async fn bind(config: &ServerConfig) -> Result<Self, AppError> {
        let addr = config.socket_addr();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| AppError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;
        info!("Server bound to {}", local_addr);

        let static_root = config.static_root_path();
        if static_root.is_dir() {
            info!("Static root directory: {}", static_root.display());
        } else {
            warn!(
                "Static root {} is not a directory; only the form API will answer",
                static_root.display()
            );
        }

        let state = Arc::new(AppState::from(config));

        Ok(Self {
            listener,
            local_addr,
            router: build_router(state),
        })
    }

    /// Address actually bound, useful when the configured port is 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves requests until Ctrl-C.
    pub async fn start(self) -> Result<(), AppError> {
        info!("Login form available at http://{}", self.local_addr);

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        info!("Server on {} stopped", self.local_addr);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
