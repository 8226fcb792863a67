//! Company data transfer objects

use serde::{Deserialize, Serialize};

use crate::products::Product;

/// A company, keyed by its NIT (tax identification number)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    /// The tax identification number, the company's primary key
    pub nit: String,

    /// The company name
    #[serde(rename = "nombre")]
    pub name: String,

    /// The company address
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The company phone number
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The company's products. Populated on reads, never sent on writes.
    #[serde(rename = "productos", skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Company {
    /// Create a company with the required fields
    pub fn new(nit: &str, name: &str) -> Self {
        Self {
            nit: nit.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }
}
