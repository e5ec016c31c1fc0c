//! HTTP server module for escola
//!
//! This module exposes the [`EnrollmentDirectory`] as a JSON REST API.
//!
//! # Architecture
//!
//! - `error` - Maps directory errors and extractor rejections to status codes
//! - `handlers` - Route handlers grouped by resource
//!
//! # Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/cursos` | 200 |
//! | GET | `/cursos/:id` | 200 |
//! | POST | `/cursos` | 201 |
//! | PUT | `/cursos/:id` | 200 |
//! | DELETE | `/cursos/:id` | 200 |
//! | GET | `/alunos` | 200 |
//! | GET | `/alunos/:id` | 200 |
//! | POST | `/alunos` | 201 |
//! | PUT | `/alunos/:id` | 200 |
//! | DELETE | `/alunos/:id` | 200 |
//! | POST | `/alunos/:id/matricular` | 200 |
//! | DELETE | `/alunos/:id/remover-matricula` | 200 |
//! | GET | `/health` | 200 |
//!
//! # Usage
//!
//! ```rust,ignore
//! use escola::server::{start_server, ServerConfig};
//!
//! let directory = EnrollmentDirectory::new(Arc::new(SqliteStore::open_in_dir("~/.escola")?));
//! start_server(directory, ServerConfig::default()).await?;
//! ```

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::config::SchoolConfig;
use crate::directory::EnrollmentDirectory;
use axum::{
    routing::{delete, get, post},
    Router as AxumRouter,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// =============================================================================
// Server Configuration
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub address: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SchoolConfig) -> Self {
        Self {
            address: config.address.clone(),
            port: config.port,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the full bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

// =============================================================================
// Server State
// =============================================================================

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub directory: Arc<EnrollmentDirectory>,
}

impl ServerState {
    pub fn new(directory: EnrollmentDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}

// =============================================================================
// Axum Router Creation
// =============================================================================

/// Create the Axum router with every route registered
pub fn create_axum_router(state: ServerState) -> AxumRouter {
    use handlers::*;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    AxumRouter::new()
        .route("/cursos", get(list_courses).post(create_course))
        .route(
            "/cursos/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route("/alunos", get(list_students).post(create_student))
        .route(
            "/alunos/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/alunos/:id/matricular", post(enroll))
        .route("/alunos/:id/remover-matricula", delete(unenroll))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Server Startup
// =============================================================================

/// Start the HTTP server
pub async fn start_server(
    directory: EnrollmentDirectory,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_axum_router(ServerState::new(directory));

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server on {}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
