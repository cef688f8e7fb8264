use crate::models::{LineItem, Product};

/// Interface for revenue policies.
///
/// A revenue strategy prices one line of a receipt given the catalog entry of
/// the product sold. The analysis subtracts the line's cost
/// (`purchase_price × quantity`) from this figure to obtain its profit.
///
/// Any `Fn(&LineItem, &Product) -> f64` is a revenue strategy.
pub trait RevenueStrategy {
    /// The revenue of `item`, expected to be non-negative
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> f64,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}
