//! # cluster-console-client
//!
//! Gateway client library for the cluster management console. Wraps the
//! remote service's cluster resource behind the [`ClusterGateway`] trait:
//! list with pagination/sort/filters, create, update, delete (single or
//! batch), enable/disable, and custom sub-resource actions such as the
//! heartbeat check.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cluster_console_client::{ClusterGateway, ClusterQueryParams, RestClusterGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = RestClusterGateway::new("http://localhost:8888/api/cluster")?;
//!
//!     let page = gateway.list(&ClusterQueryParams::default()).await?;
//!     for cluster in &page.records {
//!         println!("{} ({:?})", cluster.name, cluster.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError).
//! Transient errors (`Network`, `Timeout`, `RateLimited`) are retried with
//! exponential backoff for mutating operations; list requests fail fast so
//! the console can keep its previous rows visible.

mod datetime;
mod error;
mod gateway;
mod http_client;
mod rest;
mod types;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export the gateway trait and its REST implementation
pub use gateway::ClusterGateway;
pub use rest::RestClusterGateway;

// Re-export types
pub use types::{
    Cluster, ClusterPayload, ClusterQueryParams, ClusterStatus, ClusterType, PageResult,
    PaginationParams, SortOrder,
};
