//! Confirmation step guarding adjustment submission.
//!
//! `Idle -> PendingConfirmation -> Submitting -> Idle`. Cancelling returns a
//! pending adjustment to `Idle`; a finished submission returns to `Idle`
//! whether it succeeded or failed.

use livraria_core::{DomainError, DomainResult};

use crate::adjustment::{ApplyPriceAdjustment, ScopeType};

/// A validated adjustment awaiting the operator's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdjustment {
    /// Human percent as typed (5.0 for 5%).
    pub percent: f64,
    pub category_name: Option<String>,
    pub payload: ApplyPriceAdjustment,
}

impl PendingAdjustment {
    /// Text shown once the backend accepted the adjustment.
    pub fn success_message(&self) -> String {
        match self.payload.scope_type {
            ScopeType::Global => {
                format!("Reajuste global de {}% enviado com sucesso!", self.percent)
            }
            ScopeType::Category => "Reajuste da categoria aplicado com sucesso!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    PendingConfirmation(PendingAdjustment),
    Submitting(PendingAdjustment),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmationDialog {
    state: DialogState,
}

impl ConfirmationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DialogState::Idle)
    }

    pub fn pending(&self) -> Option<&PendingAdjustment> {
        match &self.state {
            DialogState::PendingConfirmation(p) | DialogState::Submitting(p) => Some(p),
            DialogState::Idle => None,
        }
    }

    /// Show a validated adjustment for confirmation. Re-opening replaces the
    /// pending adjustment; opening while submitting is a conflict.
    pub fn open(&mut self, pending: PendingAdjustment) -> DomainResult<()> {
        if let DialogState::Submitting(_) = self.state {
            return Err(DomainError::conflict("an adjustment is already being submitted"));
        }
        self.state = DialogState::PendingConfirmation(pending);
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.state {
            DialogState::Submitting(_) => Err(DomainError::conflict(
                "cannot cancel an adjustment that is being submitted",
            )),
            _ => {
                self.state = DialogState::Idle;
                Ok(())
            }
        }
    }

    /// Move to `Submitting` and hand out the adjustment to send.
    pub fn begin_submit(&mut self) -> DomainResult<PendingAdjustment> {
        match core::mem::take(&mut self.state) {
            DialogState::PendingConfirmation(p) => {
                self.state = DialogState::Submitting(p.clone());
                Ok(p)
            }
            other => {
                self.state = other;
                Err(DomainError::invariant("no adjustment awaiting confirmation"))
            }
        }
    }

    /// Leave `Submitting`, regardless of outcome.
    pub fn finish(&mut self) -> DomainResult<()> {
        match self.state {
            DialogState::Submitting(_) => {
                self.state = DialogState::Idle;
                Ok(())
            }
            _ => Err(DomainError::invariant("no adjustment is being submitted")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::AdjustmentForm;

    fn pending() -> PendingAdjustment {
        AdjustmentForm::global("10").prepare(&[]).unwrap()
    }

    #[test]
    fn happy_path_returns_to_idle() {
        let mut dialog = ConfirmationDialog::new();
        dialog.open(pending()).unwrap();
        assert!(matches!(dialog.state(), DialogState::PendingConfirmation(_)));

        let p = dialog.begin_submit().unwrap();
        assert_eq!(p.payload.percent, 0.1);
        assert!(matches!(dialog.state(), DialogState::Submitting(_)));

        dialog.finish().unwrap();
        assert!(dialog.is_idle());
    }

    #[test]
    fn submit_requires_pending_confirmation() {
        let mut dialog = ConfirmationDialog::new();
        assert!(matches!(
            dialog.begin_submit(),
            Err(DomainError::InvariantViolation(_))
        ));
        assert!(dialog.is_idle());
    }

    #[test]
    fn cannot_cancel_or_reopen_while_submitting() {
        let mut dialog = ConfirmationDialog::new();
        dialog.open(pending()).unwrap();
        dialog.begin_submit().unwrap();
        assert!(matches!(dialog.cancel(), Err(DomainError::Conflict(_))));
        assert!(matches!(dialog.open(pending()), Err(DomainError::Conflict(_))));
        assert!(matches!(dialog.begin_submit(), Err(DomainError::InvariantViolation(_))));
        assert!(dialog.pending().is_some());
    }

    #[test]
    fn cancel_discards_pending() {
        let mut dialog = ConfirmationDialog::new();
        dialog.open(pending()).unwrap();
        dialog.cancel().unwrap();
        assert!(dialog.pending().is_none());
        assert!(dialog.finish().is_err());
    }

    #[test]
    fn success_messages() {
        assert_eq!(
            pending().success_message(),
            "Reajuste global de 10% enviado com sucesso!"
        );
    }
}
