use super::{ProductId, SellerId};

/// A pre-joined sale: seller and product identity with revenue and profit
/// already computed by the caller. No reference tables are consulted for
/// these records.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatSale {
    /// The seller credited with the sale
    pub seller_id: SellerId,
    /// The seller's display name
    pub seller_name: String,
    /// The product sold
    pub product_id: ProductId,
    /// Revenue of the sale
    pub revenue: f64,
    /// Profit of the sale
    pub profit: f64,
}
