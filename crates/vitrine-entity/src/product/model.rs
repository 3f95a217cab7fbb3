//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog product in the `produtos` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product name.
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    /// Product description.
    #[serde(rename = "descricao")]
    #[sqlx(rename = "descricao")]
    pub description: Option<String>,
    /// Unit price.
    #[serde(rename = "preco")]
    #[sqlx(rename = "preco")]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "estoque")]
    #[sqlx(rename = "estoque")]
    pub stock: i32,
    /// Available sizes.
    #[serde(rename = "tamanhos")]
    #[sqlx(rename = "tamanhos")]
    pub sizes: Vec<String>,
    /// Image reference.
    #[serde(rename = "imagem")]
    #[sqlx(rename = "imagem")]
    pub image: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Image reference.
    pub image: Option<String>,
}

/// Replacement data for an existing product. Every field is written,
/// matching the full-overwrite semantics of the update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Available sizes.
    pub sizes: Vec<String>,
    /// Image reference.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_portuguese() {
        let product = Product {
            id: Uuid::new_v4(),
            name: "Camiseta".to_string(),
            description: Some("Basica".to_string()),
            price: Decimal::new(4990, 2),
            stock: 12,
            sizes: vec!["P".to_string(), "M".to_string(), "G".to_string()],
            image: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["nome"], "Camiseta");
        assert_eq!(json["descricao"], "Basica");
        assert_eq!(json["estoque"], 12);
        assert_eq!(json["tamanhos"].as_array().unwrap().len(), 3);
        assert!(json.get("name").is_none());
    }
}
