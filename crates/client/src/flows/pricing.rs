//! Price Adjustment Dispatcher: validate, confirm, submit, then re-fetch.
//!
//! After a successful submission the whole pricing dataset is fetched again
//! instead of being patched locally; compounding and rounding happen on the
//! backend and are not reproduced here.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use livraria_core::DomainError;
use livraria_pricing::{AdjustmentForm, ConfirmationDialog, PendingAdjustment, PricingError};

use crate::api::BackendApi;
use crate::error::ClientError;
use crate::flows::loaders::fetch_pricing_snapshot;
use crate::notify::Notifier;
use crate::store::InventoryStore;

const APPLY_FAILED: &str = "Erro ao aplicar reajuste. Verifique os dados e tente novamente.";
const RELOAD_FAILED: &str = "Erro ao carregar dados de reajuste.";

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Rejected(#[from] PricingError),

    #[error(transparent)]
    Backend(#[from] ClientError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of a confirmed adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentOutcome {
    pub applied: PendingAdjustment,
    /// Whether the pricing data was re-fetched afterwards.
    pub refreshed: bool,
}

pub struct PriceAdjustmentDispatcher {
    backend: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    dialog: ConfirmationDialog,
}

impl PriceAdjustmentDispatcher {
    pub fn new(backend: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            dialog: ConfirmationDialog::new(),
        }
    }

    pub fn dialog(&self) -> &ConfirmationDialog {
        &self.dialog
    }

    /// Validate `form` and open the confirmation step. Nothing is sent.
    pub fn request_confirmation(
        &mut self,
        form: &AdjustmentForm,
        store: &InventoryStore,
    ) -> Result<&PendingAdjustment, DispatchError> {
        let pending = match form.prepare(&store.pricing().categories) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    scope = ?form.scope,
                    "adjustment rejected before confirmation"
                );
                self.notifier.error(&e.to_string());
                return Err(e.into());
            }
        };

        self.dialog.open(pending)?;
        self.dialog
            .pending()
            .ok_or_else(|| DomainError::invariant("confirmation did not open").into())
    }

    pub fn cancel(&mut self) -> Result<(), DispatchError> {
        self.dialog.cancel()?;
        Ok(())
    }

    /// Submit the adjustment awaiting confirmation, then re-fetch pricing data.
    ///
    /// The dialog returns to idle whatever the outcome. A failed re-fetch is
    /// reported but does not undo the (already applied) adjustment.
    pub async fn confirm(
        &mut self,
        store: &mut InventoryStore,
    ) -> Result<AdjustmentOutcome, DispatchError> {
        let flow_id = Uuid::now_v7();
        let span = tracing::info_span!("apply_price_adjustment", %flow_id);
        self.confirm_inner(store).instrument(span).await
    }

    async fn confirm_inner(
        &mut self,
        store: &mut InventoryStore,
    ) -> Result<AdjustmentOutcome, DispatchError> {
        let pending = self.dialog.begin_submit()?;
        let applied = self.backend.apply_price_adjustment(&pending.payload).await;
        self.dialog.finish()?;

        if let Err(e) = applied {
            tracing::error!(
                error = %e,
                scope = ?pending.payload.scope_type,
                "failed to apply price adjustment"
            );
            self.notifier.error(APPLY_FAILED);
            return Err(e.into());
        }

        tracing::info!(
            scope = ?pending.payload.scope_type,
            percent = pending.payload.percent,
            category_id = ?pending.payload.category_id,
            note = %pending.payload.note,
            "price adjustment applied"
        );
        self.notifier.success(&pending.success_message());

        let refreshed = match fetch_pricing_snapshot(self.backend.as_ref()).await {
            Ok(snapshot) => {
                *store = std::mem::take(store).with_pricing(snapshot);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to reload pricing data");
                self.notifier.error(RELOAD_FAILED);
                false
            }
        };

        Ok(AdjustmentOutcome {
            applied: pending,
            refreshed,
        })
    }
}
