//! Client error model and backend error-message extraction.

use serde_json::Value;

use livraria_core::DomainError;

/// Shown when a backend error body carries nothing readable.
pub const FALLBACK_ERROR_MESSAGE: &str = "Erro ao processar a solicitação. Tente novamente.";

/// Per-item fallback inside an `errors` array.
const VALIDATION_ITEM_FALLBACK: &str = "Erro de validação";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend could not be reached (connection refused, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered with a body we could not decode.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// Message from the backend, when it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Best-effort human message from a backend error body.
///
/// Tried in order: a bare string; the `error`, `message` and `details` fields;
/// an `errors` array (each entry's `defaultMessage`, `message` or `field`);
/// every string value of the object. Falls back to [`FALLBACK_ERROR_MESSAGE`].
pub fn extract_backend_message(body: &Value) -> String {
    if let Value::String(s) = body {
        return s.clone();
    }

    for key in ["error", "message", "details"] {
        if let Some(msg) = non_empty_str(body.get(key)) {
            return msg.to_string();
        }
    }

    if let Some(Value::Array(errors)) = body.get("errors") {
        return errors
            .iter()
            .map(|err| {
                ["defaultMessage", "message", "field"]
                    .iter()
                    .find_map(|k| non_empty_str(err.get(*k)))
                    .unwrap_or(VALIDATION_ITEM_FALLBACK)
            })
            .collect::<Vec<_>>()
            .join(", ");
    }

    if let Value::Object(map) = body {
        let messages: Vec<&str> = map.values().filter_map(Value::as_str).collect();
        if !messages.is_empty() {
            return messages.join(", ");
        }
    }

    FALLBACK_ERROR_MESSAGE.to_string()
}

/// Message for a raw error body: JSON goes through [`extract_backend_message`],
/// anything else non-blank is used as-is.
pub fn message_from_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract_backend_message(&value),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_is_used_verbatim() {
        assert_eq!(extract_backend_message(&json!("SKU duplicado")), "SKU duplicado");
    }

    #[test]
    fn named_fields_in_priority_order() {
        assert_eq!(
            extract_backend_message(&json!({ "message": "m", "error": "e", "details": "d" })),
            "e"
        );
        assert_eq!(
            extract_backend_message(&json!({ "message": "m", "details": "d" })),
            "m"
        );
        assert_eq!(extract_backend_message(&json!({ "details": "d" })), "d");
    }

    #[test]
    fn validation_array_is_joined() {
        let body = json!({
            "errors": [
                { "defaultMessage": "nome obrigatório", "field": "name" },
                { "message": "isbn inválido" },
                { "field": "price" },
                { "code": 3 }
            ]
        });
        assert_eq!(
            extract_backend_message(&body),
            "nome obrigatório, isbn inválido, price, Erro de validação"
        );
    }

    #[test]
    fn string_values_of_object_are_joined() {
        let body = json!({ "sku": "já existe", "status": 409 });
        assert_eq!(extract_backend_message(&body), "já existe");
    }

    #[test]
    fn fallback_when_nothing_readable() {
        assert_eq!(extract_backend_message(&json!({ "status": 500 })), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_backend_message(&json!(null)), FALLBACK_ERROR_MESSAGE);
        assert_eq!(message_from_body(""), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn raw_text_body() {
        assert_eq!(message_from_body("Bad Gateway"), "Bad Gateway");
        assert_eq!(message_from_body(r#"{"error":"conflito"}"#), "conflito");
    }
}
