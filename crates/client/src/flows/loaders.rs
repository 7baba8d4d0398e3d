//! Initial data loads for each view.
//!
//! Independent fetches are dispatched concurrently and awaited together;
//! the store is only touched once all of them succeeded.

use std::sync::Arc;

use livraria_inventory::Movement;
use livraria_products::Product;

use crate::api::BackendApi;
use crate::dashboard::DashboardOverview;
use crate::error::ClientError;
use crate::notify::Notifier;
use crate::store::{InventoryStore, PricingSnapshot};

/// Movements (newest first) and products, fetched concurrently.
pub async fn fetch_movements_view(
    backend: &dyn BackendApi,
) -> Result<(Vec<Movement>, Vec<Product>), ClientError> {
    let (records, products) = tokio::try_join!(backend.list_movements(), backend.list_products())?;
    let mut movements: Vec<Movement> = records.into_iter().map(Movement::from).collect();
    livraria_inventory::sort_most_recent_first(&mut movements);
    Ok((movements, products))
}

/// Category percents, adjustment history and global percent, fetched concurrently.
pub async fn fetch_pricing_snapshot(
    backend: &dyn BackendApi,
) -> Result<PricingSnapshot, ClientError> {
    let (categories, history, global) = tokio::try_join!(
        backend.category_percents(),
        backend.price_history(),
        backend.global_percent(),
    )?;
    Ok(PricingSnapshot::new(categories, history, global))
}

pub struct ViewLoader {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
}

impl ViewLoader {
    pub fn new(backend: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    pub async fn load_movements_view(&self, store: &mut InventoryStore) -> Result<(), ClientError> {
        match fetch_movements_view(self.backend.as_ref()).await {
            Ok((movements, products)) => {
                tracing::info!(
                    movements = movements.len(),
                    products = products.len(),
                    "movements view loaded"
                );
                *store = std::mem::take(store)
                    .with_movements(movements)
                    .with_products(products);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load movements view");
                self.notifier.error("Erro ao carregar movimentações de estoque.");
                Err(e)
            }
        }
    }

    pub async fn load_pricing_view(&self, store: &mut InventoryStore) -> Result<(), ClientError> {
        match fetch_pricing_snapshot(self.backend.as_ref()).await {
            Ok(snapshot) => {
                tracing::info!(
                    categories = snapshot.categories.len(),
                    history = snapshot.history.len(),
                    global_percent = snapshot.global_percent,
                    "pricing view loaded"
                );
                *store = std::mem::take(store).with_pricing(snapshot);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load pricing view");
                self.notifier.error("Erro ao carregar dados de reajuste.");
                Err(e)
            }
        }
    }

    pub async fn load_catalog(&self, store: &mut InventoryStore) -> Result<(), ClientError> {
        match self.backend.list_products().await {
            Ok(products) => {
                tracing::info!(products = products.len(), "catalog loaded");
                *store = std::mem::take(store).with_products(products);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
                self.notifier.error("Erro ao carregar dados da API");
                Err(e)
            }
        }
    }

    pub async fn load_dashboard(&self) -> Result<DashboardOverview, ClientError> {
        self.backend.dashboard_overview().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to load dashboard");
            self.notifier.error("Erro ao carregar dashboard.");
        })
    }
}
