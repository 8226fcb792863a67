//! Product data transfer objects

use serde::{Deserialize, Serialize};

/// A product belonging to a company
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// The product id, assigned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The product code
    #[serde(rename = "codigo")]
    pub code: String,

    /// The product name
    #[serde(rename = "nombre")]
    pub name: String,

    /// The unit price
    #[serde(rename = "precio")]
    pub price: f64,

    /// Three-letter uppercase currency code; the backend defaults to USD
    #[serde(rename = "moneda", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Free-text characteristics
    #[serde(rename = "caracteristicas", skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<String>,

    /// NIT of the owning company
    #[serde(rename = "empresaNit", skip_serializing_if = "Option::is_none")]
    pub company_nit: Option<String>,

    /// Id of the product category
    #[serde(rename = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl Product {
    /// Create a product with the required fields
    pub fn new(code: &str, name: &str, price: f64, company_nit: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            price,
            company_nit: Some(company_nit.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let mut product = Product::new("SKU-9", "Widget", 19.99, "900123456");
        product.currency = Some("COP".to_string());

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["codigo"], "SKU-9");
        assert_eq!(json["nombre"], "Widget");
        assert_eq!(json["precio"], 19.99);
        assert_eq!(json["moneda"], "COP");
        assert_eq!(json["empresaNit"], "900123456");
        assert!(json.get("id").is_none());
        assert!(json.get("categoriaId").is_none());
    }

    #[test]
    fn deserializes_sparse_payloads() {
        let json = r#"{"codigo": "SKU-1", "nombre": "Widget", "precio": 3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 3.0);
        assert!(product.id.is_none());
        assert!(product.currency.is_none());
    }
}
