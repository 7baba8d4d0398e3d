//! Price adjustment module.
//!
//! Scope selection, percent parsing, audit note synthesis, and the
//! confirmation state machine that guards submission. The backend applies
//! the percent to prices; nothing here computes a price.

pub mod adjustment;
pub mod dialog;
pub mod form;
pub mod percent;

pub use adjustment::{
    AdjustedCategory, ApplyPriceAdjustment, CategoryPercent, PriceAdjustment, ScopeType,
    sort_history_most_recent_first,
};
pub use dialog::{ConfirmationDialog, DialogState, PendingAdjustment};
pub use form::{AdjustmentForm, PricingError, default_note};
pub use percent::{format_percent_for_view, parse_percent, percent_to_fraction};
