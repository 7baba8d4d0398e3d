//! `livraria-client`
//!
//! **Responsibility:** bookstore inventory client over the backend REST API.
//!
//! This crate provides:
//! - The `BackendApi` seam and its reqwest implementation
//! - An in-memory application store with explicit field authority
//! - The movement posting, price adjustment and catalog flows
//! - Concurrent initial loads for each view
//!
//! The backend is the source of truth for every entity; the client only
//! validates, submits, and mirrors.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod flows;
pub mod notify;
pub mod store;

pub use api::{BackendApi, HttpBackend};
pub use config::ClientConfig;
pub use dashboard::DashboardOverview;
pub use error::{ClientError, extract_backend_message};
pub use flows::{MovementPoster, PriceAdjustmentDispatcher, ProductCatalog, ViewLoader};
pub use notify::{BufferedNotifier, Level, LogNotifier, Notification, Notifier};
pub use store::{InventoryStore, PricingSnapshot};
