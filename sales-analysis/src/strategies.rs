//! Ready-made revenue and bonus policies.
//!
//! None of these are used by the pipeline unless a caller passes them in.
//! Their tier fractions are plain fields, so a caller can adjust the
//! constants without writing a new strategy.

use sales_core::{
    models::{LineItem, Product, SellerTotals},
    ports::{BonusStrategy, RevenueStrategy},
};

/// Revenue as charged on the receipt: `sale_price × quantity × (1 − discount / 100)`,
/// using the line's own sale price.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity * discount
    }
}

/// Revenue at catalog price: `product.sale_price × quantity`.
///
/// A negative or NaN quantity or price counts as zero, so the result is never
/// negative.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogRevenue;

impl RevenueStrategy for CatalogRevenue {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        item.quantity.max(0.0) * product.sale_price.max(0.0)
    }
}

/// A bonus paid as a fraction of profit, by rank:
///
/// - rank 0 receives `first`
/// - ranks 1 and 2 receive `podium`
/// - the last rank receives `last`
/// - every other rank receives `middle`
///
/// The podium rule wins over the last-rank rule when they overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ProfitTierBonus {
    /// Fraction of profit paid to the most profitable seller
    pub first: f64,
    /// Fraction of profit paid to the second and third sellers
    pub podium: f64,
    /// Fraction of profit paid to the remaining sellers
    pub middle: f64,
    /// Fraction of profit paid to the least profitable seller
    pub last: f64,
}

impl Default for ProfitTierBonus {
    fn default() -> Self {
        Self {
            first: 0.15,
            podium: 0.10,
            middle: 0.05,
            last: 0.0,
        }
    }
}

impl BonusStrategy for ProfitTierBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerTotals) -> f64 {
        let fraction = match rank {
            0 => self.first,
            1 | 2 => self.podium,
            rank if rank + 1 == total => self.last,
            _ => self.middle,
        };
        seller.profit * fraction
    }
}

/// A bonus paid as a fraction of revenue, by rank:
///
/// - rank 0 receives `first`
/// - the last rank receives `last`
/// - every other rank receives `middle`
///
/// A sole seller is both first and last and receives `first`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RevenueTierBonus {
    /// Fraction of revenue paid to the most profitable seller
    pub first: f64,
    /// Fraction of revenue paid to the sellers between first and last
    pub middle: f64,
    /// Fraction of revenue paid to the least profitable seller
    pub last: f64,
}

impl Default for RevenueTierBonus {
    fn default() -> Self {
        Self {
            first: 0.05,
            middle: 0.02,
            last: 0.01,
        }
    }
}

impl BonusStrategy for RevenueTierBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerTotals) -> f64 {
        let fraction = match rank {
            0 => self.first,
            rank if rank + 1 == total => self.last,
            _ => self.middle,
        };
        seller.revenue * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    fn totals(revenue: f64, profit: f64) -> SellerTotals {
        SellerTotals {
            seller_id: "s".into(),
            name: "S".to_owned(),
            revenue,
            profit,
            sales_count: 1,
        }
    }

    fn line(quantity: f64, discount: f64, sale_price: f64) -> LineItem {
        LineItem {
            sku: "x".into(),
            quantity,
            discount,
            sale_price,
        }
    }

    #[test]
    fn test_simple_revenue_applies_discount() {
        let product = Product::new("x", 1.0, 99.0);
        assert_relative_eq!(SimpleRevenue.revenue(&line(3.0, 10.0, 20.0), &product), 54.0);
        assert_relative_eq!(SimpleRevenue.revenue(&line(3.0, 0.0, 20.0), &product), 60.0);
    }

    #[rstest]
    #[case(2.0, 5.0, 10.0)]
    #[case(-2.0, 5.0, 0.0)]
    #[case(2.0, -5.0, 0.0)]
    #[case(f64::NAN, 5.0, 0.0)]
    fn test_catalog_revenue(#[case] quantity: f64, #[case] price: f64, #[case] expected: f64) {
        let product = Product::new("x", 1.0, price);
        assert_eq!(CatalogRevenue.revenue(&line(quantity, 50.0, 1.0), &product), expected);
    }

    #[rstest]
    #[case(0, 10, 15.0)]
    #[case(1, 10, 10.0)]
    #[case(2, 10, 10.0)]
    #[case(5, 10, 5.0)]
    #[case(9, 10, 0.0)]
    #[case(2, 3, 10.0)]
    #[case(0, 1, 15.0)]
    fn test_profit_tiers(#[case] rank: usize, #[case] total: usize, #[case] expected: f64) {
        let bonus = ProfitTierBonus::default().bonus(rank, total, &totals(1000.0, 100.0));
        assert_relative_eq!(bonus, expected, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0, 4, 50.0)]
    #[case(1, 4, 20.0)]
    #[case(3, 4, 10.0)]
    #[case(0, 1, 50.0)]
    fn test_revenue_tiers(#[case] rank: usize, #[case] total: usize, #[case] expected: f64) {
        let bonus = RevenueTierBonus::default().bonus(rank, total, &totals(1000.0, 100.0));
        assert_relative_eq!(bonus, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_tiers_from_partial_config() {
        let bonus: ProfitTierBonus = serde_json::from_str(r#"{"first": 0.2}"#).unwrap();
        assert_eq!(
            bonus,
            ProfitTierBonus {
                first: 0.2,
                ..Default::default()
            }
        );
    }
}
