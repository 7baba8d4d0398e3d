//! Product create/edit form.

use serde::{Deserialize, Serialize};

use livraria_core::input::{leading_float, leading_int};
use livraria_core::{AuthorId, CategoryId, DomainError, DomainResult};

use crate::product::{DEFAULT_PRODUCT_TYPE, DEFAULT_UNIT, Product, ProductRequest};

/// Longest accepted quantity input, in digits.
pub const MAX_QUANTITY_DIGITS: usize = 5;

/// Raw form state, every field as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub product_type: String,
    pub price: String,
    pub unit: String,
    pub stock_qty: String,
    pub min_qty: String,
    pub max_qty: String,
    pub category_id: String,
    pub author_ids: Vec<String>,
    pub publisher: String,
    pub isbn: String,
}

/// Whether a quantity field accepts `value` as typed: empty, or up to five digits.
pub fn accepts_quantity_input(value: &str) -> bool {
    value.is_empty()
        || (value.len() <= MAX_QUANTITY_DIGITS && value.bytes().all(|b| b.is_ascii_digit()))
}

impl ProductForm {
    /// Empty form with the catalog defaults pre-selected.
    pub fn empty() -> Self {
        Self {
            product_type: DEFAULT_PRODUCT_TYPE.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            ..Self::default()
        }
    }

    /// Pre-filled form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone().unwrap_or_default(),
            product_type: product
                .product_type
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_PRODUCT_TYPE.to_string()),
            price: product.price.to_string(),
            unit: product
                .unit
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            stock_qty: product.stock_qty.to_string(),
            min_qty: product.min_qty.to_string(),
            max_qty: product.max_qty.map(|m| m.to_string()).unwrap_or_default(),
            category_id: product
                .category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            author_ids: product.authors.iter().map(|a| a.id.to_string()).collect(),
            publisher: product.publisher.clone().unwrap_or_default(),
            isbn: product.isbn.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert into the backend payload.
    ///
    /// Required text fields are checked before authors. Numeric fields fall back
    /// to zero when blank or unreadable, and a zero maximum means "no maximum".
    pub fn into_request(&self) -> DomainResult<ProductRequest> {
        if self.name.is_empty()
            || self.sku.is_empty()
            || self.category_id.is_empty()
            || self.isbn.is_empty()
        {
            return Err(DomainError::validation(
                "Preencha todos os campos obrigatórios (*).",
            ));
        }

        if self.author_ids.is_empty() {
            return Err(DomainError::validation("Selecione pelo menos um autor."));
        }

        let category_id: CategoryId = self.category_id.parse()?;
        let author_ids = self
            .author_ids
            .iter()
            .map(|id| id.parse::<AuthorId>())
            .collect::<Result<Vec<_>, _>>()?;

        let max_qty = leading_int(&self.max_qty).filter(|m| *m != 0);
        let publisher = Some(self.publisher.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(ProductRequest {
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            product_type: non_empty_or(&self.product_type, DEFAULT_PRODUCT_TYPE),
            price: leading_float(&self.price).unwrap_or(0.0),
            unit: non_empty_or(&self.unit, DEFAULT_UNIT),
            stock_qty: leading_int(&self.stock_qty).unwrap_or(0),
            min_qty: leading_int(&self.min_qty).unwrap_or(0),
            max_qty,
            category_id,
            author_ids,
            publisher,
            isbn: Some(self.isbn.trim().to_string()),
        })
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "  Quincas Borba ".into(),
            sku: "QB-01".into(),
            price: "49.90".into(),
            stock_qty: "10".into(),
            min_qty: "2".into(),
            max_qty: "".into(),
            category_id: "3".into(),
            author_ids: vec!["7".into()],
            publisher: "  ".into(),
            isbn: " 978000 ".into(),
            ..ProductForm::empty()
        }
    }

    #[test]
    fn builds_request_with_defaults() {
        let req = filled_form().into_request().unwrap();
        assert_eq!(req.name, "Quincas Borba");
        assert_eq!(req.product_type, DEFAULT_PRODUCT_TYPE);
        assert_eq!(req.unit, DEFAULT_UNIT);
        assert_eq!(req.price, 49.90);
        assert_eq!(req.stock_qty, 10);
        assert_eq!(req.max_qty, None);
        assert_eq!(req.publisher, None);
        assert_eq!(req.isbn.as_deref(), Some("978000"));
        assert_eq!(req.category_id, CategoryId::new(3));
        assert_eq!(req.author_ids, vec![AuthorId::new(7)]);
    }

    #[test]
    fn zero_max_means_no_max() {
        let mut form = filled_form();
        form.max_qty = "0".into();
        assert_eq!(form.into_request().unwrap().max_qty, None);
        form.max_qty = "30".into();
        assert_eq!(form.into_request().unwrap().max_qty, Some(30));
    }

    #[test]
    fn unreadable_numbers_fall_back_to_zero() {
        let mut form = filled_form();
        form.price = "abc".into();
        form.stock_qty = "".into();
        let req = form.into_request().unwrap();
        assert_eq!(req.price, 0.0);
        assert_eq!(req.stock_qty, 0);
    }

    #[test]
    fn required_fields_are_checked_before_authors() {
        let mut form = filled_form();
        form.isbn.clear();
        form.author_ids.clear();
        let err = form.into_request().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Preencha todos os campos obrigatórios (*).")
        );
    }

    #[test]
    fn at_least_one_author_required() {
        let mut form = filled_form();
        form.author_ids.clear();
        let err = form.into_request().unwrap_err();
        assert_eq!(err, DomainError::validation("Selecione pelo menos um autor."));
    }

    #[test]
    fn invalid_category_id_is_rejected() {
        let mut form = filled_form();
        form.category_id = "romance".into();
        assert!(matches!(
            form.into_request().unwrap_err(),
            DomainError::InvalidId(_)
        ));
    }

    #[test]
    fn quantity_input_filter() {
        assert!(accepts_quantity_input(""));
        assert!(accepts_quantity_input("99999"));
        assert!(!accepts_quantity_input("100000"));
        assert!(!accepts_quantity_input("-1"));
        assert!(!accepts_quantity_input("1.5"));
    }

    proptest! {
        /// Property: any digit string of at most five characters is accepted.
        #[test]
        fn short_digit_strings_are_accepted(s in "[0-9]{0,5}") {
            prop_assert!(accepts_quantity_input(&s));
        }

        /// Property: six or more digits are never accepted.
        #[test]
        fn long_digit_strings_are_rejected(s in "[0-9]{6,10}") {
            prop_assert!(!accepts_quantity_input(&s));
        }
    }
}
