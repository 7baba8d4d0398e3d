//! Adjustment form validation and payload building.

use thiserror::Error;

use livraria_core::CategoryId;

use crate::adjustment::{ApplyPriceAdjustment, CategoryPercent, ScopeType};
use crate::dialog::PendingAdjustment;
use crate::percent::{parse_percent, percent_to_fraction};

/// Reasons an adjustment cannot reach the confirmation step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Informe o percentual de reajuste global.")]
    MissingGlobalPercent,

    #[error("Informe o percentual e selecione a categoria.")]
    MissingCategoryFields,

    #[error("Percentual inválido: {0}")]
    InvalidPercent(String),
}

/// Adjustment form state as entered by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentForm {
    pub scope: ScopeType,
    /// Human percent (`"5"` means 5%).
    pub percent: String,
    pub category_id: Option<CategoryId>,
    pub note: String,
}

impl AdjustmentForm {
    pub fn global(percent: impl Into<String>) -> Self {
        Self {
            scope: ScopeType::Global,
            percent: percent.into(),
            category_id: None,
            note: String::new(),
        }
    }

    pub fn category(percent: impl Into<String>, category_id: Option<CategoryId>) -> Self {
        Self {
            scope: ScopeType::Category,
            percent: percent.into(),
            category_id,
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Validate and build what the confirmation step shows and later submits.
    ///
    /// `categories` resolves the category name used in the default note.
    pub fn prepare(
        &self,
        categories: &[CategoryPercent],
    ) -> Result<PendingAdjustment, PricingError> {
        let category_id = match self.scope {
            ScopeType::Global => {
                if self.percent.is_empty() {
                    return Err(PricingError::MissingGlobalPercent);
                }
                None
            }
            ScopeType::Category => match self.category_id {
                Some(id) if !self.percent.is_empty() => Some(id),
                _ => return Err(PricingError::MissingCategoryFields),
            },
        };

        let percent = parse_percent(&self.percent)
            .ok_or_else(|| PricingError::InvalidPercent(self.percent.clone()))?;

        let category_name = category_id.and_then(|id| {
            categories
                .iter()
                .find(|c| c.category_id == id)
                .map(|c| c.name_category.clone())
        });

        let note = if self.note.is_empty() {
            default_note(self.scope, category_name.as_deref(), percent)
        } else {
            self.note.clone()
        };

        Ok(PendingAdjustment {
            percent,
            category_name,
            payload: ApplyPriceAdjustment {
                scope_type: self.scope,
                percent: percent_to_fraction(percent),
                category_id,
                note,
            },
        })
    }
}

/// Audit note recorded when the operator leaves the note blank.
pub fn default_note(scope: ScopeType, category_name: Option<&str>, percent: f64) -> String {
    match scope {
        ScopeType::Global => format!("Reajuste global de {percent}%"),
        ScopeType::Category => format!(
            "Atualização de percentual da categoria {} para {percent}%",
            category_name.unwrap_or_default()
        ),
    }
}
