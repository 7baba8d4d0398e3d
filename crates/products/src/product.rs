use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use livraria_core::{AuthorId, CategoryId, Entity, ProductId};

/// Product type used when the form leaves it blank.
pub const DEFAULT_PRODUCT_TYPE: &str = "Livro";

/// Unit of measure used when the form leaves it blank.
pub const DEFAULT_UNIT: &str = "unidade";

/// Category summary embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub packaging_type: Option<String>,
    /// Decimal fraction (0.05 = 5%).
    #[serde(default)]
    pub default_adjustment_percent: f64,
}

/// Author summary embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAuthor {
    pub id: AuthorId,
    pub full_name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub product_count: u32,
}

/// Product read model (matches the backend response shape).
///
/// `stock_qty` is the only field the client ever changes locally; everything
/// else is replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    /// Base unit price.
    pub price: f64,
    /// Price after the backend applied the active adjustment percent.
    #[serde(default)]
    pub price_with_percent: f64,
    #[serde(default)]
    pub unit: Option<String>,
    pub stock_qty: i64,
    pub min_qty: i64,
    #[serde(default)]
    pub max_qty: Option<i64>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub authors: Vec<ProductAuthor>,
}

impl Product {
    /// Copy of this product with a different stock quantity.
    pub fn with_stock(&self, stock_qty: i64) -> Self {
        Self {
            stock_qty,
            ..self.clone()
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::of(self.stock_qty, self.min_qty, self.max_qty)
    }

    /// Author names joined with `", "`.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.full_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Stock level classification shown next to each catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Overstock,
    Normal,
}

impl StockStatus {
    /// Classify a stock level. Checks run in order: empty, below minimum, above maximum.
    pub fn of(stock: i64, min: i64, max: Option<i64>) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < min {
            StockStatus::Low
        } else if max.is_some_and(|max| stock > max) {
            StockStatus::Overstock
        } else {
            StockStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Indisponível",
            StockStatus::Low => "Estoque Baixo",
            StockStatus::Overstock => "Excedente",
            StockStatus::Normal => "Normal",
        }
    }
}

/// Create/update payload (`POST /products`, `PUT /products/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub sku: String,
    pub product_type: String,
    pub price: f64,
    pub unit: String,
    pub stock_qty: i64,
    pub min_qty: i64,
    pub max_qty: Option<i64>,
    pub category_id: CategoryId,
    pub author_ids: Vec<AuthorId>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": 3,
            "name": "Dom Casmurro",
            "productType": "Livro",
            "price": 39.9,
            "priceWithPercent": 41.9,
            "unit": "unidade",
            "stockQty": 12,
            "minQty": 5,
            "maxQty": 40,
            "publisher": "Garnier",
            "isbn": "9788535910663",
            "sku": "DC-001",
            "category": {
                "id": 1,
                "name": "Romance",
                "size": "Médio",
                "packagingType": "Capa Comum",
                "defaultAdjustmentPercent": 0.05
            },
            "authors": [
                { "id": 9, "fullName": "Machado de Assis", "birthDate": "1839-06-21", "productCount": 4 }
            ]
        })
    }

    #[test]
    fn deserializes_backend_product() {
        let product: Product = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.max_qty, Some(40));
        assert_eq!(product.category_id(), Some(CategoryId::new(1)));
        assert_eq!(product.author_names(), "Machado de Assis");
        assert_eq!(
            product.authors[0].birth_date,
            NaiveDate::from_ymd_opt(1839, 6, 21)
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let product: Product = serde_json::from_value(json!({
            "id": 1, "name": "X", "price": 1.0, "stockQty": 0, "minQty": 0, "maxQty": null
        }))
        .unwrap();
        assert_eq!(product.max_qty, None);
        assert!(product.category.is_none());
        assert!(product.authors.is_empty());
    }

    #[test]
    fn with_stock_leaves_other_fields_untouched() {
        let product: Product = serde_json::from_value(sample_json()).unwrap();
        let moved = product.with_stock(25);
        assert_eq!(moved.stock_qty, 25);
        assert_eq!(moved.name, product.name);
        assert_eq!(product.stock_qty, 12);
    }

    #[test]
    fn stock_status_precedence() {
        assert_eq!(StockStatus::of(0, 5, Some(20)), StockStatus::OutOfStock);
        assert_eq!(StockStatus::of(3, 5, Some(20)), StockStatus::Low);
        assert_eq!(StockStatus::of(21, 5, Some(20)), StockStatus::Overstock);
        assert_eq!(StockStatus::of(21, 5, None), StockStatus::Normal);
        assert_eq!(StockStatus::of(10, 5, Some(20)), StockStatus::Normal);
    }

    #[test]
    fn request_serializes_camel_case() {
        let req = ProductRequest {
            name: "A".into(),
            sku: "S".into(),
            product_type: DEFAULT_PRODUCT_TYPE.into(),
            price: 10.0,
            unit: DEFAULT_UNIT.into(),
            stock_qty: 1,
            min_qty: 0,
            max_qty: None,
            category_id: CategoryId::new(2),
            author_ids: vec![AuthorId::new(4)],
            publisher: None,
            isbn: Some("123".into()),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["stockQty"], 1);
        assert_eq!(v["categoryId"], 2);
        assert_eq!(v["authorIds"], json!([4]));
        assert!(v["maxQty"].is_null());
    }
}
