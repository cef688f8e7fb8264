use super::{CustomerId, SellerId, Sku};

/// A single line of a receipt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    /// The product sold
    pub sku: Sku,
    /// Units sold
    pub quantity: f64,
    /// Discount applied to this line, in percent (0 to 100)
    #[cfg_attr(feature = "serde", serde(default))]
    pub discount: f64,
    /// Unit price charged on this receipt before discount
    #[cfg_attr(feature = "serde", serde(default))]
    pub sale_price: f64,
}

/// A purchase (receipt) made through one seller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseRecord {
    /// Receipt identifier, if the source system provides one
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub receipt_id: Option<String>,
    /// Purchase date, as provided by the source system
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub date: Option<String>,
    /// The seller credited with the sale
    pub seller_id: SellerId,
    /// The buying customer
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub customer_id: Option<CustomerId>,
    /// The lines of the receipt
    pub items: Vec<LineItem>,
    /// Amount paid for the whole receipt
    pub total_amount: f64,
    /// Discount granted on the whole receipt
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_discount: f64,
}

impl PurchaseRecord {
    /// Create a record with only the fields the analysis reads
    pub fn new(seller_id: impl Into<SellerId>, items: Vec<LineItem>, total_amount: f64) -> Self {
        Self {
            receipt_id: None,
            date: None,
            seller_id: seller_id.into(),
            customer_id: None,
            items,
            total_amount,
            total_discount: 0.0,
        }
    }
}
