//! Request DTOs with validation.
//!
//! Wire field names are the Portuguese ones the original clients send
//! (`nome`, `senha`, ...); serde renames bridge them to English
//! identifiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use vitrine_entity::product::{CreateProduct, UpdateProduct};

/// Registration request body (`POST /cadastro`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed before it reaches the store.
    #[serde(rename = "senha")]
    pub password: String,
}

/// Login request body (`POST /login`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    /// Plaintext password.
    #[serde(rename = "senha")]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Product payload, shared by create (`POST /produtos`) and full-overwrite
/// update (`PUT /produtos/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    /// Product name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Product description.
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "estoque", default)]
    pub stock: i32,
    /// Available sizes.
    #[serde(rename = "tamanhos", default)]
    pub sizes: Vec<String>,
    /// Image reference.
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
}

impl ProductRequest {
    /// Convert into the entity-level create model.
    pub fn into_create(self) -> CreateProduct {
        CreateProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            image: self.image,
        }
    }

    /// Convert into the entity-level update model.
    pub fn into_update(self) -> UpdateProduct {
        UpdateProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            sizes: self.sizes,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_portuguese_wire_names() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"nome": "Ana", "email": "a@x.com", "senha": "s3cr3t"}"#,
        )
        .unwrap();

        assert_eq!(req.name, "Ana");
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.password, "s3cr3t");
    }

    #[test]
    fn test_login_request_rejects_empty_fields() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "", "senha": "s3cr3t"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "senha": ""}"#).unwrap();
        assert!(req.validate().is_err());

        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "senha": "s3cr3t"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_product_request_defaults() {
        let req: ProductRequest =
            serde_json::from_str(r#"{"nome": "Camiseta", "preco": 49.9}"#).unwrap();

        assert_eq!(req.stock, 0);
        assert!(req.sizes.is_empty());
        assert!(req.description.is_none());
        assert!(req.image.is_none());
    }
}
