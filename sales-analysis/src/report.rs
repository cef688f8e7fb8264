use crate::{RankedSeller, rank::descending};
use sales_core::models::{SellerReport, TopProduct};

/// Round a monetary amount to two decimal places
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project ranked accumulators into reports, preserving their order.
///
/// Revenue, profit and bonus are rounded to two decimal places. Each seller's
/// products are ordered by metric, highest first, with ties kept in the order
/// the products were first sold, and only the first `limit` are kept.
pub fn build_reports<T: TopProduct>(
    ranked: Vec<RankedSeller<T::Key>>,
    limit: usize,
) -> Vec<SellerReport<T>> {
    ranked.into_iter().map(|seller| build_report(seller, limit)).collect()
}

fn build_report<T: TopProduct>(seller: RankedSeller<T::Key>, limit: usize) -> SellerReport<T> {
    let RankedSeller { stats, bonus, .. } = seller;

    let mut products = stats.products.into_iter().collect::<Vec<_>>();
    products.sort_by(|(_, a), (_, b)| descending(*a, *b));
    products.truncate(limit);

    let top_products = products
        .into_iter()
        .map(|(key, metric)| {
            let metric = if T::MONETARY { round_money(metric) } else { metric };
            T::new(key, metric)
        })
        .collect();

    SellerReport {
        seller_id: stats.totals.seller_id,
        name: stats.totals.name,
        revenue: round_money(stats.totals.revenue),
        profit: round_money(stats.totals.profit),
        sales_count: stats.totals.sales_count,
        top_products,
        bonus: round_money(bonus),
    }
}
