use super::{CustomerId, SellerId, Sku};

/// A seller: the source of truth for identity and naming in a report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seller {
    /// Unique identifier of the seller
    pub id: SellerId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Trading start date, as provided by the source system
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_date: Option<String>,
    /// Position or role of the seller
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<String>,
}

impl Seller {
    /// Create a seller with only the fields the analysis reads
    pub fn new(id: impl Into<SellerId>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            start_date: None,
            position: None,
        }
    }

    /// The name a report shows for this seller: first and last name joined by a space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer. Customers are required to be present in a dataset but do not
/// otherwise contribute to seller statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Unique identifier of the customer
    pub id: CustomerId,
    /// Given name
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_name: String,
    /// Family name
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_name: String,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Stock keeping unit, the key line items refer to
    pub sku: Sku,
    /// Human-readable product name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Product category
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Unit cost paid by the shop
    pub purchase_price: f64,
    /// Unit list price
    pub sale_price: f64,
}

impl Product {
    /// Create a product with only the fields the analysis reads
    pub fn new(sku: impl Into<Sku>, purchase_price: f64, sale_price: f64) -> Self {
        Self {
            sku: sku.into(),
            name: String::new(),
            category: String::new(),
            purchase_price,
            sale_price,
        }
    }
}
