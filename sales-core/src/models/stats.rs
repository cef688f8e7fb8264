use super::{Map, SellerId};
use std::hash::Hash;

/// The running totals of one seller. This is the view bonus strategies receive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellerTotals {
    /// The seller these totals belong to
    pub seller_id: SellerId,
    /// The seller's display name
    pub name: String,
    /// Cumulative revenue, at full precision
    pub revenue: f64,
    /// Cumulative profit, at full precision
    pub profit: f64,
    /// Number of sales credited to the seller
    pub sales_count: usize,
}

/// The working aggregate for one seller, built fresh for every analysis.
///
/// `products` maps a product key to the accumulated metric for that product
/// (units sold, or revenue contributed), in the order products were first sold.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerStats<K: Eq + Hash> {
    /// Revenue, profit and sale count
    pub totals: SellerTotals,
    /// Accumulated metric per product
    pub products: Map<K>,
}

impl<K: Eq + Hash> SellerStats<K> {
    /// Start an accumulator with all counters at zero
    pub fn new(seller_id: SellerId, name: String) -> Self {
        Self {
            totals: SellerTotals {
                seller_id,
                name,
                revenue: 0.0,
                profit: 0.0,
                sales_count: 0,
            },
            products: Map::default(),
        }
    }
}
