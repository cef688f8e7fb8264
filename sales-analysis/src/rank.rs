use sales_core::{models::SellerStats, ports::BonusStrategy};
use std::{cmp::Ordering, hash::Hash};
use tracing::{Level, event};

/// A seller accumulator at its final position, together with its bonus
#[derive(Clone, Debug, PartialEq)]
pub struct RankedSeller<K: Eq + Hash> {
    /// 0-based position in the profit ordering
    pub rank: usize,
    /// The seller's accumulated figures
    pub stats: SellerStats<K>,
    /// The bonus assigned by the strategy
    pub bonus: f64,
}

/// Order sellers by profit, highest first, and assign each a bonus.
///
/// The sort is stable: sellers with equal profit keep their aggregation
/// order. A NaN profit ranks below every number. The bonus strategy is then
/// called once per seller with its 0-based rank and the seller count, and its
/// result is stored as is.
pub fn rank_sellers<K: Eq + Hash>(
    mut sellers: Vec<SellerStats<K>>,
    strategy: &dyn BonusStrategy,
) -> Vec<RankedSeller<K>> {
    sellers.sort_by(|a, b| descending(a.totals.profit, b.totals.profit));

    let total = sellers.len();
    event!(Level::DEBUG, sellers = total, "ranked sellers by profit");

    sellers
        .into_iter()
        .enumerate()
        .map(|(rank, stats)| {
            let bonus = strategy.bonus(rank, total, &stats.totals);
            RankedSeller { rank, stats, bonus }
        })
        .collect()
}

/// Compare two metrics so that the larger sorts first.
///
/// `sort_by` requires a total order, so NaN is treated as the smallest value
/// and the two zeros as equal.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::models::{SellerId, SellerTotals};

    fn stats(id: &str, profit: f64) -> SellerStats<String> {
        let mut stats = SellerStats::new(SellerId::from(id), id.to_owned());
        stats.totals.profit = profit;
        stats
    }

    fn order(ranked: &[RankedSeller<String>]) -> Vec<&str> {
        ranked
            .iter()
            .map(|seller| seller.stats.totals.seller_id.as_str())
            .collect()
    }

    #[test]
    fn test_profit_descending_and_stable() {
        let sellers = vec![
            stats("a", 5.0),
            stats("b", 10.0),
            stats("c", 5.0),
            stats("d", -1.0),
            stats("e", 10.0),
        ];

        let ranked = rank_sellers(sellers, &|_: usize, _: usize, _: &SellerTotals| 0.0);
        assert_eq!(order(&ranked), vec!["b", "e", "a", "c", "d"]);
        assert_eq!(
            ranked.iter().map(|seller| seller.rank).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_nan_and_signed_zero() {
        let sellers = vec![
            stats("nan", f64::NAN),
            stats("neg_zero", -0.0),
            stats("zero", 0.0),
            stats("neg", -3.0),
        ];

        let ranked = rank_sellers(sellers, &|_: usize, _: usize, _: &SellerTotals| 0.0);
        assert_eq!(order(&ranked), vec!["neg_zero", "zero", "neg", "nan"]);
    }

    #[test]
    fn test_bonus_receives_rank_and_total() {
        let sellers = vec![stats("a", 1.0), stats("b", 3.0), stats("c", 2.0)];

        let ranked = rank_sellers(sellers, &|rank: usize, total: usize, seller: &SellerTotals| {
            seller.profit * 1000.0 + (total * 10 + rank) as f64
        });
        assert_eq!(
            ranked.iter().map(|seller| seller.bonus).collect::<Vec<_>>(),
            vec![3030.0, 2031.0, 1032.0]
        );
    }

    #[test]
    fn test_negative_bonus_passes_through() {
        let ranked = rank_sellers(
            vec![stats("a", 1.0)],
            &|_: usize, _: usize, _: &SellerTotals| -7.5,
        );
        assert_eq!(ranked[0].bonus, -7.5);
    }
}
