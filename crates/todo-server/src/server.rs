//! `TodoServer` — Axum HTTP server for the todo API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use todo_store::TaskService;

use crate::config::ServerConfig;
use crate::handlers;
use crate::health;
use crate::shutdown::ShutdownCoordinator;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task service backing every endpoint.
    pub tasks: Arc<TaskService>,
}

/// The todo API server.
pub struct TodoServer {
    config: ServerConfig,
    tasks: Arc<TaskService>,
    shutdown: Arc<ShutdownCoordinator>,
}

impl TodoServer {
    /// Create a new server around an already-wired task service.
    pub fn new(config: ServerConfig, tasks: TaskService) -> Self {
        Self {
            config,
            tasks: Arc::new(tasks),
            shutdown: Arc::new(ShutdownCoordinator::new()),
        }
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            tasks: self.tasks.clone(),
        };

        Router::new()
            .route(
                "/todo",
                get(handlers::list_todos)
                    .post(handlers::create_todo)
                    .patch(handlers::toggle_todos)
                    .delete(handlers::remove_todos),
            )
            .route(
                "/todo/{id}",
                get(handlers::get_todo)
                    .put(handlers::update_todo)
                    .delete(handlers::delete_todo),
            )
            .route("/health", get(health::health))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind and serve until shutdown is signalled.
    ///
    /// Returns the bound address (useful with port `0`) and the serve task's
    /// handle; await the handle after calling [`shutdown`](Self::shutdown)
    /// to drain in-flight requests.
    pub async fn listen(&self) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
        let listener =
            tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let addr = listener.local_addr()?;

        let router = self.router();
        let token = self.shutdown.token();
        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, router)
                .with_graceful_shutdown(async move { token.cancelled().await });
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "server terminated abnormally");
            }
        });

        Ok((addr, handle))
    }

    /// Get the shutdown coordinator.
    pub fn shutdown(&self) -> &Arc<ShutdownCoordinator> {
        &self.shutdown
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
