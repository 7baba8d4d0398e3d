//! Pre-submit validation of a movement.

use thiserror::Error;

use livraria_core::entity::find_by_id;
use livraria_core::{ProductId, UserId};
use livraria_products::Product;

use crate::movement::{MovementType, NewMovement};
use crate::quantity::Quantity;

/// Reasons a movement is rejected before anything is sent to the backend.
///
/// Messages are the texts shown to the operator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovementError {
    #[error("Preencha todos os campos obrigatórios")]
    MissingFields,

    #[error("A quantidade não pode ser menor que zero")]
    NegativeQuantity,

    #[error("A quantidade não pode ter mais de 5 dígitos")]
    QuantityTooLarge,

    #[error("Digite uma quantidade válida maior que zero")]
    InvalidQuantity,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Quantidade insuficiente em estoque")]
    InsufficientStock { available: i64, requested: i64 },
}

/// Movement form state as entered by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementDraft {
    pub product_id: Option<ProductId>,
    pub quantity: String,
    pub movement_type: MovementType,
    pub note: String,
}

impl Default for MovementDraft {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: String::new(),
            movement_type: MovementType::Inbound,
            note: String::new(),
        }
    }
}

/// A draft that passed every check, bound to the product it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMovement {
    pub product: Product,
    pub quantity: Quantity,
    pub movement_type: MovementType,
    pub note: Option<String>,
}

impl MovementDraft {
    /// Validate against the locally known products. First failing check wins.
    pub fn validate(&self, products: &[Product]) -> Result<ValidatedMovement, MovementError> {
        let Some(product_id) = self.product_id else {
            return Err(MovementError::MissingFields);
        };
        let quantity = Quantity::parse(&self.quantity)?;

        let product = find_by_id(products, &product_id).ok_or(MovementError::ProductNotFound)?;

        if self.movement_type == MovementType::Outbound && product.stock_qty < quantity.get() {
            return Err(MovementError::InsufficientStock {
                available: product.stock_qty,
                requested: quantity.get(),
            });
        }

        Ok(ValidatedMovement {
            product: product.clone(),
            quantity,
            movement_type: self.movement_type,
            note: Some(self.note.clone()).filter(|n| !n.is_empty()),
        })
    }
}

impl ValidatedMovement {
    /// Backend payload; `user_id` is the acting operator, if known.
    pub fn to_payload(&self, user_id: Option<UserId>) -> NewMovement {
        NewMovement {
            product_id: self.product.id,
            quantity: self.quantity,
            movement_type: self.movement_type,
            note: self.note.clone(),
            user_id: user_id.filter(|id| id.get() != 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Livro {id}"),
            sku: None,
            product_type: None,
            price: 20.0,
            price_with_percent: 20.0,
            unit: None,
            stock_qty: stock,
            min_qty: 5,
            max_qty: Some(20),
            publisher: None,
            isbn: None,
            category: None,
            authors: Vec::new(),
        }
    }

    fn draft(product: Option<i64>, quantity: &str, t: MovementType) -> MovementDraft {
        MovementDraft {
            product_id: product.map(ProductId::new),
            quantity: quantity.to_string(),
            movement_type: t,
            note: String::new(),
        }
    }

    #[test]
    fn missing_product_or_quantity() {
        let products = vec![product(1, 10)];
        assert_eq!(
            draft(None, "3", MovementType::Inbound).validate(&products),
            Err(MovementError::MissingFields)
        );
        assert_eq!(
            draft(Some(1), "", MovementType::Inbound).validate(&products),
            Err(MovementError::MissingFields)
        );
    }

    #[test]
    fn quantity_checks_run_before_product_lookup() {
        let products = vec![product(1, 10)];
        assert_eq!(
            draft(Some(99), "0", MovementType::Inbound).validate(&products),
            Err(MovementError::InvalidQuantity)
        );
        assert_eq!(
            draft(Some(99), "3", MovementType::Inbound).validate(&products),
            Err(MovementError::ProductNotFound)
        );
    }

    #[test]
    fn outbound_cannot_exceed_stock() {
        let products = vec![product(1, 10)];
        assert_eq!(
            draft(Some(1), "11", MovementType::Outbound).validate(&products),
            Err(MovementError::InsufficientStock {
                available: 10,
                requested: 11
            })
        );
        assert!(draft(Some(1), "10", MovementType::Outbound)
            .validate(&products)
            .is_ok());
    }

    #[test]
    fn inbound_ignores_current_stock() {
        let products = vec![product(1, 0)];
        let ok = draft(Some(1), "500", MovementType::Inbound)
            .validate(&products)
            .unwrap();
        assert_eq!(ok.quantity.get(), 500);
    }

    #[test]
    fn payload_drops_empty_note_and_zero_user() {
        let products = vec![product(1, 10)];
        let ok = draft(Some(1), "2", MovementType::Inbound)
            .validate(&products)
            .unwrap();
        let payload = ok.to_payload(Some(UserId::new(0)));
        assert_eq!(payload.note, None);
        assert_eq!(payload.user_id, None);

        let mut with_note = draft(Some(1), "2", MovementType::Inbound);
        with_note.note = "reposição".into();
        let payload = with_note
            .validate(&products)
            .unwrap()
            .to_payload(Some(UserId::new(4)));
        assert_eq!(payload.note.as_deref(), Some("reposição"));
        assert_eq!(payload.user_id, Some(UserId::new(4)));
    }
}
