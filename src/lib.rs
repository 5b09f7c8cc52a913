//! # redir
//!
//! A fast and secure URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity and the store trait
//! - **Application Layer** ([`application`]) - Shortening orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis store, in-memory
//!   store, and safety screening
//! - **Handlers** ([`handlers`]) - HTTP surface: landing page, shorten,
//!   redirect, health
//!
//! ## Features
//!
//! - Bidirectional code ↔ URL mappings with atomic dual-key writes
//! - Deduplication: shortening the same URL twice returns the same code
//! - Optional TTL expiry on mappings
//! - Pre-storage URL validation (schemes, private hosts, injection patterns,
//!   reserved domains)
//! - Opt-in Google Safe Browsing screening
//! - Process-wide token-bucket rate limiting
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost:6379"
//! export BASE_URL="http://localhost:8080"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod middleware;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{ShortenOutcome, ShortenerService};
    pub use crate::domain::{Mapping, MappingStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::{MemoryStore, RedisStore};
    pub use crate::infrastructure::safety::{NullChecker, SafetyChecker};
    pub use crate::state::AppState;
}
