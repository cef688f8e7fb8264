use crate::models::SellerTotals;

/// Interface for bonus policies.
///
/// After sellers are ranked by profit, the strategy is called once per seller
/// with:
///
/// - `rank`: the seller's 0-based position (0 is the most profitable seller)
/// - `total`: the number of ranked sellers
/// - `seller`: the seller's totals, at full precision
///
/// The returned figure is stored as the seller's bonus without further
/// checks; negative values are passed through unchanged.
///
/// Any `Fn(usize, usize, &SellerTotals) -> f64` is a bonus strategy.
pub trait BonusStrategy {
    /// The bonus of the seller at `rank` out of `total`
    fn bonus(&self, rank: usize, total: usize, seller: &SellerTotals) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerTotals) -> f64,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerTotals) -> f64 {
        self(rank, total, seller)
    }
}
