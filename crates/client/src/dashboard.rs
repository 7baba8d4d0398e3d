//! Dashboard overview read model (`GET /dashboard/overview`).

use serde::{Deserialize, Serialize};

use livraria_core::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCount {
    pub total_products: u64,
    pub total_categories: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock_qty: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementSummary {
    pub total_movements: u64,
    pub total_entradas: u64,
    pub total_saidas: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockValue {
    pub total_stock_value: f64,
    pub total_stock_value_percentage: f64,
    pub total_products: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub product_count: ProductCount,
    #[serde(default)]
    pub last_products: Vec<ProductSummary>,
    pub movement_summary: MovementSummary,
    pub stock_value: StockValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_overview() {
        let overview: DashboardOverview = serde_json::from_value(json!({
            "productCount": { "totalProducts": 12, "totalCategories": 3 },
            "lastProducts": [ { "id": 1, "name": "Iracema", "price": 25.5, "stockQty": 4 } ],
            "movementSummary": { "totalMovements": 9, "totalEntradas": 6, "totalSaidas": 3 },
            "stockValue": { "totalStockValue": 1530.0, "totalStockValuePercentage": 1606.5, "totalProducts": 12 }
        }))
        .unwrap();
        assert_eq!(overview.product_count.total_categories, 3);
        assert_eq!(overview.last_products[0].id, ProductId::new(1));
        assert_eq!(overview.movement_summary.total_saidas, 3);
    }
}
