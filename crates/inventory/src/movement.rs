use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use livraria_core::{Entity, MovementId, ProductId, UserId};

use crate::quantity::Quantity;

/// Direction of a stock movement.
///
/// Shown to operators as `Entrada`/`Saída`, sent over the wire as `ENTRADA`/`SAIDA`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    #[serde(rename = "ENTRADA")]
    Inbound,
    #[serde(rename = "SAIDA")]
    Outbound,
}

impl MovementType {
    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Inbound => "Entrada",
            MovementType::Outbound => "Saída",
        }
    }

    /// Stock level after moving `quantity` units in this direction.
    pub fn apply(&self, stock: i64, quantity: Quantity) -> i64 {
        match self {
            MovementType::Inbound => stock + quantity.get(),
            MovementType::Outbound => stock - quantity.get(),
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Movement as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub id: MovementId,
    pub product_id: ProductId,
    pub product_name: String,
    /// Decimal on the backend; arrives as a number or a numeric string.
    #[serde(deserialize_with = "number_or_string")]
    pub quantity: i64,
    pub movement_type: MovementType,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub movement_date: NaiveDateTime,
}

/// Movement as kept in the local list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub product_name: String,
    pub date: NaiveDateTime,
    pub quantity: i64,
    pub movement_type: MovementType,
    pub note: Option<String>,
}

impl From<MovementRecord> for Movement {
    fn from(record: MovementRecord) -> Self {
        Self {
            id: record.id,
            product_id: record.product_id,
            product_name: record.product_name,
            date: record.movement_date,
            quantity: record.quantity,
            movement_type: record.movement_type,
            note: record.note.filter(|n| !n.is_empty()),
        }
    }
}

impl Entity for Movement {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Create payload for a movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub movement_type: MovementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Sort movements newest first (stable for equal timestamps).
pub fn sort_most_recent_first(movements: &mut [Movement]) {
    movements.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Movement list filter.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MovementFilter {
    #[default]
    All,
    Only(MovementType),
}

impl MovementFilter {
    pub fn matches(&self, movement: &Movement) -> bool {
        match self {
            MovementFilter::All => true,
            MovementFilter::Only(t) => movement.movement_type == *t,
        }
    }

    pub fn apply<'a>(&self, movements: &'a [Movement]) -> Vec<&'a Movement> {
        movements.iter().filter(|m| self.matches(m)).collect()
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Float(f) => Ok(f.round() as i64),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(|f| f.round() as i64)
            .map_err(serde::de::Error::custom),
    }
}
