//! Product catalog create/update/delete.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use livraria_core::{DomainError, ProductId};
use livraria_products::{Product, ProductForm};

use crate::api::BackendApi;
use crate::error::ClientError;
use crate::notify::Notifier;
use crate::store::InventoryStore;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error(transparent)]
    Backend(#[from] ClientError),
}

pub struct ProductCatalog {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
}

impl ProductCatalog {
    pub fn new(backend: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Create a product, or update `editing` when set.
    pub async fn save(
        &self,
        store: &mut InventoryStore,
        form: &ProductForm,
        editing: Option<ProductId>,
    ) -> Result<Product, CatalogError> {
        let flow_id = Uuid::now_v7();
        let span = tracing::info_span!("save_product", %flow_id, editing = ?editing);
        async {
            let request = match form.into_request() {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, "product form rejected");
                    self.notifier.error(&e.user_message());
                    return Err(e.into());
                }
            };

            let result = match editing {
                Some(id) => self.backend.update_product(id, &request).await,
                None => self.backend.create_product(&request).await,
            };

            match result {
                Ok(product) => {
                    tracing::info!(product_id = %product.id, "product saved");
                    self.notifier.success(if editing.is_some() {
                        "Produto atualizado com sucesso!"
                    } else {
                        "Produto criado com sucesso!"
                    });
                    *store = std::mem::take(store).with_saved_product(product.clone());
                    Ok(product)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to save product");
                    self.notifier.error(e.backend_message().unwrap_or("Erro ao salvar produto."));
                    Err(e.into())
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn delete(
        &self,
        store: &mut InventoryStore,
        id: ProductId,
    ) -> Result<(), CatalogError> {
        let flow_id = Uuid::now_v7();
        let span = tracing::info_span!("delete_product", %flow_id, product_id = %id);
        async {
            match self.backend.delete_product(id).await {
                Ok(()) => {
                    tracing::info!("product deleted");
                    *store = std::mem::take(store).without_product(id);
                    self.notifier.success("Produto excluído com sucesso!");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to delete product");
                    self.notifier.error(e.backend_message().unwrap_or("Erro ao excluir produto."));
                    Err(e.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
