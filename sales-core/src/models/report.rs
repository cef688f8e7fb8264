use super::{ProductId, SellerId, Sku};
use std::hash::Hash;

/// The final, immutable performance report of one seller.
///
/// Monetary fields are rounded to two decimal places. `top_products` is
/// ordered by its metric, highest first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellerReport<T> {
    /// The seller reported on
    pub seller_id: SellerId,
    /// The seller's display name
    pub name: String,
    /// Total revenue
    pub revenue: f64,
    /// Total profit
    pub profit: f64,
    /// Number of sales
    pub sales_count: usize,
    /// The best-selling products
    pub top_products: Vec<T>,
    /// The bonus assigned for the seller's rank
    pub bonus: f64,
}

/// An entry of a report's `top_products` list, built from a product key and
/// its accumulated metric.
pub trait TopProduct {
    /// The product key the metric was accumulated under
    type Key: Eq + Hash;

    /// Whether the metric is an amount of money (and so is rounded like one)
    const MONETARY: bool;

    /// Build an entry from a key and its metric
    fn new(key: Self::Key, metric: f64) -> Self;

    /// The metric the list is ordered by
    fn metric(&self) -> f64;
}

/// Units sold of one product, used by reports built from receipts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductQuantity {
    /// The product
    pub sku: Sku,
    /// Units sold
    pub quantity: f64,
}

impl TopProduct for ProductQuantity {
    type Key = Sku;
    const MONETARY: bool = false;

    fn new(sku: Sku, quantity: f64) -> Self {
        Self { sku, quantity }
    }

    fn metric(&self) -> f64 {
        self.quantity
    }
}

/// Revenue contributed by one product, used by reports built from flat sales.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductRevenue {
    /// The product
    pub product_id: ProductId,
    /// Revenue contributed
    pub revenue: f64,
}

impl TopProduct for ProductRevenue {
    type Key = ProductId;
    const MONETARY: bool = true;

    fn new(product_id: ProductId, revenue: f64) -> Self {
        Self {
            product_id,
            revenue,
        }
    }

    fn metric(&self) -> f64 {
        self.revenue
    }
}
