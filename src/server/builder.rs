//! ServerBuilder for fluent API to build the stock HTTP server

use anyhow::Result;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use super::logging::log_requests;
use crate::config::AppConfig;
use crate::core::auth::{AuthPolicy, AuthProvider, Operation, StaticTokenProvider};
use crate::core::error::{AuthError, StockError};
use crate::stock::handlers::{
    AppState, create_stock, delete_stock, get_stock, list_stock, update_stock,
};
use crate::stock::service::StockService;
use crate::stock::store::StockStore;

/// Builder for creating the stock API server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStockStore::new())
///     .with_config(AppConfig::default_config())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn StockStore>>,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    config: AppConfig,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            auth_provider: None,
            config: AppConfig::default(),
        }
    }

    /// Set the stock store (required)
    pub fn with_store(mut self, store: impl StockStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the auth provider
    ///
    /// Defaults to a [`StaticTokenProvider`] over the configured tokens.
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Arc::new(provider));
        self
    }

    /// Set the application configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the final router
    ///
    /// Routes:
    /// - GET    /stock               - list (paginated)
    /// - POST   /stock               - create
    /// - GET    /stock/{productId}   - get
    /// - PUT    /stock/{productId}   - update quantity
    /// - DELETE /stock/{productId}   - delete
    /// - GET    /health, /healthz    - health check
    ///
    /// Each stock route carries the authorization gate declared for its
    /// operation; the whole router is wrapped by the request observability
    /// layer, so the gate runs after the entry log and before validation.
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("StockStore is required. Call .with_store()"))?;

        let auth = self.auth_provider.unwrap_or_else(|| {
            Arc::new(StaticTokenProvider::new(self.config.auth.tokens.clone()))
        });

        let state = AppState {
            service: Arc::new(StockService::new(store)),
            auth,
            policies: self.config.auth.policies.to_policies(),
            pagination: self.config.pagination,
        };

        let stock_routes = Router::new()
            .route(
                "/stock",
                get(list_stock).route_layer(middleware::from_fn_with_state(
                    GateContext::declare(&state, Operation::List),
                    auth_gate,
                )),
            )
            .route(
                "/stock",
                post(create_stock).route_layer(middleware::from_fn_with_state(
                    GateContext::declare(&state, Operation::Create),
                    auth_gate,
                )),
            )
            .route(
                "/stock/{productId}",
                get(get_stock).route_layer(middleware::from_fn_with_state(
                    GateContext::declare(&state, Operation::Get),
                    auth_gate,
                )),
            )
            .route(
                "/stock/{productId}",
                put(update_stock).route_layer(middleware::from_fn_with_state(
                    GateContext::declare(&state, Operation::Update),
                    auth_gate,
                )),
            )
            .route(
                "/stock/{productId}",
                delete(delete_stock).route_layer(middleware::from_fn_with_state(
                    GateContext::declare(&state, Operation::Delete),
                    auth_gate,
                )),
            )
            .with_state(state);

        let app = Self::health_routes()
            .merge(stock_routes)
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_requests));

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind_addr.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "restock"
        }))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// State for one authorization gate layer
#[derive(Clone)]
struct GateContext {
    auth: Arc<dyn AuthProvider>,
    policy: AuthPolicy,
    operation: Operation,
}

impl GateContext {
    /// The declared gate for an operation, from the policy table
    fn declare(state: &AppState, operation: Operation) -> Self {
        Self {
            auth: state.auth.clone(),
            policy: state.policies.policy_for(operation),
            operation,
        }
    }
}

/// Gate middleware: deny before any business logic runs
///
/// Runs ahead of the handler and its extractors, so a denied request is
/// rejected before the body is even read.
async fn auth_gate(
    State(ctx): State<GateContext>,
    req: Request,
    next: Next,
) -> Result<Response, StockError> {
    let context = ctx
        .auth
        .authenticate(req.headers())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "auth provider failure");
            AuthError::InvalidCredential
        })?;

    if !ctx.policy.check(&context) {
        let denied = if req.headers().contains_key(AUTHORIZATION) {
            AuthError::InvalidCredential
        } else {
            AuthError::MissingCredential
        };
        tracing::debug!(
            operation = ctx.operation.as_str(),
            reason = %denied,
            "request denied by authorization gate"
        );
        return Err(denied.into());
    }

    Ok(next.run(req).await)
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
