//! Headless entry point: loads the dashboard and the movements view once and
//! logs a stock summary.

use std::sync::Arc;

use anyhow::Context;

use livraria_client::{
    BackendApi, ClientConfig, HttpBackend, InventoryStore, LogNotifier, Notifier, ViewLoader,
};
use livraria_products::StockStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    livraria_observability::init();

    let config = ClientConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        authenticated = config.auth_token.is_some(),
        "starting livraria client"
    );

    let backend: Arc<dyn BackendApi> =
        Arc::new(HttpBackend::new(&config).context("failed to build HTTP client")?);
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let loader = ViewLoader::new(backend, notifier);

    let overview = loader
        .load_dashboard()
        .await
        .context("failed to load dashboard overview")?;
    tracing::info!(
        products = overview.product_count.total_products,
        categories = overview.product_count.total_categories,
        movements = overview.movement_summary.total_movements,
        stock_value = overview.stock_value.total_stock_value,
        "dashboard"
    );

    let mut store = InventoryStore::new();
    loader
        .load_movements_view(&mut store)
        .await
        .context("failed to load movements view")?;

    for product in store.products() {
        match product.stock_status() {
            StockStatus::Normal => {}
            status => tracing::warn!(
                product_id = %product.id,
                name = %product.name,
                stock = product.stock_qty,
                min = product.min_qty,
                status = status.label(),
                "stock attention"
            ),
        }
    }

    Ok(())
}
