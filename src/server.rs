use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::any};
use bytes::Bytes;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::protocol::{self, Command, GET_PATH, GetCmd, SET_PATH, SetCmd};
use crate::store::FlagStore;

/// Store handle shared by every request handler
pub type SharedStore = Arc<dyn FlagStore>;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: SharedStore,
}

impl Server {
    /// Create and bind TCP server to specified address
    pub async fn bind(addr: &str, store: SharedStore) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        debug!("TCP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until SIGINT or SIGTERM
    pub async fn run(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Starting server on {}", self.local_addr);

        // Each connection is served on its own task.
        axum::serve(self.listener, router(self.store))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server on {} shut down", self.local_addr);
        Ok(())
    }
}

/// Build the router with both flag operations mounted
///
/// Routes accept any method; the body carries the whole request.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(GET_PATH, any(handle::<GetCmd>))
        .route(SET_PATH, any(handle::<SetCmd>))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

/// Decode the body as `C`, execute it and encode the response
async fn handle<C: Command>(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<C::Response>> {
    let command = protocol::decode::<C>(&body)?;
    debug!(command = C::NAME, "Executing command");
    Ok(Json(command.execute(store.as_ref()).await))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
