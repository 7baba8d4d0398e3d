//! Movement Poster: validate, submit, project stock, raise threshold alerts.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use livraria_core::UserId;
use livraria_inventory::{Movement, MovementDraft, MovementError, StockProjection};

use crate::api::BackendApi;
use crate::error::ClientError;
use crate::notify::Notifier;
use crate::store::InventoryStore;

const POST_FAILED: &str = "Não foi possível registrar a movimentação. Tente novamente.";
const POST_SUCCEEDED: &str = "Movimentação registrada com sucesso!";

#[derive(Debug, thiserror::Error)]
pub enum PostMovementError {
    #[error(transparent)]
    Rejected(#[from] MovementError),

    #[error(transparent)]
    Backend(#[from] ClientError),
}

/// Outcome of a successful post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedMovement {
    pub movement: Movement,
    pub projection: StockProjection,
}

pub struct MovementPoster {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    user_id: Option<UserId>,
}

impl MovementPoster {
    pub fn new(backend: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            user_id: None,
        }
    }

    /// Acting operator recorded on each movement.
    pub fn with_user(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Validate `draft` against the store, submit it, and on success prepend
    /// the created movement and project the product's stock.
    ///
    /// Rejections and backend failures leave `store` untouched.
    pub async fn post(
        &self,
        store: &mut InventoryStore,
        draft: &MovementDraft,
    ) -> Result<PostedMovement, PostMovementError> {
        let flow_id = Uuid::now_v7();
        let span = tracing::info_span!("post_movement", %flow_id);
        self.post_inner(store, draft).instrument(span).await
    }

    async fn post_inner(
        &self,
        store: &mut InventoryStore,
        draft: &MovementDraft,
    ) -> Result<PostedMovement, PostMovementError> {
        let validated = match draft.validate(store.products()) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "movement rejected before submission");
                self.notifier.error(&e.to_string());
                return Err(e.into());
            }
        };

        let payload = validated.to_payload(self.user_id);
        let record = match self.backend.create_movement(&payload).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    product_id = %payload.product_id,
                    "failed to register movement"
                );
                self.notifier.error(POST_FAILED);
                return Err(e.into());
            }
        };

        let movement = Movement::from(record);
        let projection = StockProjection::project(
            &validated.product,
            validated.movement_type,
            validated.quantity,
        );

        if let Some(alert) = projection.alert {
            tracing::warn!(
                product_id = %validated.product.id,
                stock = projection.stock,
                ?alert,
                "stock threshold crossed"
            );
            self.notifier.warning(&alert.message(&validated.product.name));
        }

        *store = std::mem::take(store).with_recorded_movement(
            validated.product.id,
            movement.clone(),
            projection.stock,
        );

        tracing::info!(
            movement_id = %movement.id,
            product_id = %validated.product.id,
            movement_type = %validated.movement_type,
            quantity = validated.quantity.get(),
            previous = projection.previous,
            stock = projection.stock,
            "movement registered"
        );
        self.notifier.success(POST_SUCCEEDED);

        Ok(PostedMovement {
            movement,
            projection,
        })
    }
}
