//! HTTP client library for the fenseek backend.
//!
//! Provides a typed async client for the search, analysis, game-database,
//! admin and auth endpoints. All heavy lifting (the similarity index, the
//! engine, PGN parsing, session storage) happens server-side; this crate
//! only shapes requests and decodes responses.
//!
//! # Example
//!
//! ```no_run
//! use search_client::{BackendClient, BackendService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackendClient::new("http://localhost:8080")?;
//!     let hits = client
//!         .find_similar("8/8/8/4k3/8/8/8/4K3 w - - 0 1", 10)
//!         .await?;
//!     println!("{} similar positions", hits.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod traits;
mod types;

pub use client::BackendClient;
pub use error::{ClientError, ClientResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBackendService, MockCall};
pub use traits::BackendService;
pub use types::{
    AnalysisOptions, AnalysisResult, GameFilters, GamePage, GamePosition, GamePreview, GameRecord,
    SearchHit, UserInfo,
};
