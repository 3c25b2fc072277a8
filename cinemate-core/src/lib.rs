//! # Cinemate Core
//!
//! Core library for the Cinemate catalog server, providing the TV-series
//! domain types, repository ports with their Postgres and in-memory adapters,
//! bearer-session authentication primitives, and the browsing services.
//!
//! ## Overview
//!
//! - **Listing**: paginated and filtered access over series
//!   ([`domain::catalog::ListingService`])
//! - **Hierarchy navigation**: series → seasons → episodes with a distinct
//!   not-found reason at each hop ([`domain::catalog::HierarchyNavigator`])
//! - **Favorites**: idempotent add / strict remove of a series in a user's
//!   favorite set ([`domain::catalog::FavoritesToggle`])
//! - **Authentication**: HMAC-hashed opaque session tokens
//!   ([`domain::users::auth`])
//!
//! ## Feature Flags
//!
//! - `database` (default): PostgreSQL adapters and embedded migrations
//! - `pg-tests`: enables the Postgres adapter test-suite
//!
//! ## Examples
//!
//! ```no_run
//! use cinemate_core::{
//!     application::unit_of_work::CatalogUnitOfWork,
//!     database::infrastructure::memory::InMemoryCatalog,
//!     domain::catalog::ListingService,
//! };
//!
//! async fn first_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryCatalog::new();
//!     let unit_of_work = CatalogUnitOfWork::in_memory(&store);
//!     let listing = ListingService::from_unit_of_work(&unit_of_work);
//!
//!     match listing.list_series(1).await {
//!         Ok(page) => println!("{} series on page 1", page.len()),
//!         Err(err) => println!("{err}"),
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Shared route constants and wire types
pub mod api;

/// Repository aggregation consumed by services and the server
pub mod application;

/// Repository ports and their adapters
pub mod database;

/// Catalog and user domains
pub mod domain;

/// Error types and error handling utilities
pub mod error;

/// Strongly typed identifiers
pub mod types;

#[cfg(feature = "database")]
#[cfg_attr(docsrs, doc(cfg(feature = "database")))]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use error::{CatalogError, Result};
pub use types::ids::{EpisodeID, SeasonID, SeriesID, UserID};
