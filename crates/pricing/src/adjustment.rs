use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use livraria_core::{AdjustmentId, CategoryId};

/// Which products an adjustment applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeType {
    #[serde(rename = "GLOBAL")]
    Global,
    #[serde(rename = "CATEGORIA")]
    Category,
}

/// Submission payload for `POST /prices/adjust`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPriceAdjustment {
    pub scope_type: ScopeType,
    /// Decimal fraction (0.05 = 5%).
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub note: String,
}

/// Category reference carried by a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedCategory {
    pub id: CategoryId,
    pub name: String,
}

/// Entry of the append-only adjustment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    pub id: AdjustmentId,
    pub scope_type: ScopeType,
    pub percent: f64,
    #[serde(default)]
    pub category: Option<AdjustedCategory>,
    #[serde(default)]
    pub note: Option<String>,
    pub applied_at: NaiveDateTime,
}

impl PriceAdjustment {
    /// Name shown in the history table; global entries read "Todas".
    pub fn category_label(&self) -> &str {
        self.category.as_ref().map_or("Todas", |c| c.name.as_str())
    }
}

/// Current default percent of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPercent {
    pub category_id: CategoryId,
    pub name_category: String,
    pub percent: f64,
}

pub fn sort_history_most_recent_first(history: &mut [PriceAdjustment]) {
    history.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
}
