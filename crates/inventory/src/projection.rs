//! Local stock projection after a movement is accepted by the backend.

use serde::{Deserialize, Serialize};

use livraria_products::Product;

use crate::movement::MovementType;
use crate::quantity::Quantity;

/// Threshold crossed by a projected stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAlert {
    BelowMinimum,
    AboveMaximum,
}

impl StockAlert {
    /// Operator-facing warning for `product_name`.
    pub fn message(&self, product_name: &str) -> String {
        match self {
            StockAlert::BelowMinimum => {
                format!("Atenção: Estoque de \"{product_name}\" abaixo do mínimo!")
            }
            StockAlert::AboveMaximum => {
                format!("Atenção: Estoque de \"{product_name}\" acima do máximo!")
            }
        }
    }
}

/// New stock level for a product plus at most one alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockProjection {
    pub previous: i64,
    pub stock: i64,
    pub alert: Option<StockAlert>,
}

impl StockProjection {
    pub fn project(product: &Product, movement_type: MovementType, quantity: Quantity) -> Self {
        let stock = movement_type.apply(product.stock_qty, quantity);
        Self {
            previous: product.stock_qty,
            stock,
            alert: Self::alert_for(stock, product.min_qty, product.max_qty),
        }
    }

    /// The minimum is checked first; only one alert is ever raised. Without a
    /// maximum there is no overstock alert.
    pub fn alert_for(stock: i64, min: i64, max: Option<i64>) -> Option<StockAlert> {
        if stock < min {
            Some(StockAlert::BelowMinimum)
        } else if max.is_some_and(|max| stock > max) {
            Some(StockAlert::AboveMaximum)
        } else {
            None
        }
    }
}
