//! Orchestration flows: validate locally, call the backend, then update the
//! store and notify the operator. None of them retries.

pub mod catalog;
pub mod loaders;
pub mod movements;
pub mod pricing;

pub use catalog::{CatalogError, ProductCatalog};
pub use loaders::{ViewLoader, fetch_movements_view, fetch_pricing_snapshot};
pub use movements::{MovementPoster, PostMovementError, PostedMovement};
pub use pricing::{AdjustmentOutcome, DispatchError, PriceAdjustmentDispatcher};
