//! # HTTP Server
//!
//! Axum-based server combining the service and record routers with CORS and
//! request tracing layers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::store::RecordStore;

use super::routes::{service_routes, string_routes, AppState};

/// HTTP server for the string record API
pub struct ApiServer {
    config: ServiceConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server from a configuration and a record store.
    pub fn new(config: ServiceConfig, store: Arc<dyn RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &ServiceConfig, store: Arc<dyn RecordStore>) -> Router {
        let state = Arc::new(AppState::new(store));

        // Empty origin list means permissive CORS
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(service_routes())
            .merge(string_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Socket address the server will bind
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        tracing::info!(
            %addr,
            data_file = %self.config.data_file.display(),
            "starting strand HTTP server"
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
