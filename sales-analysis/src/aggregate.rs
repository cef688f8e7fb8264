use crate::AnalysisError;
use sales_core::{
    models::{
        FlatSale, LineItem, Map, Product, ProductId, PurchaseRecord, SalesDataset, SellerId,
        SellerStats, Sku, UnknownIdPolicy,
    },
    ports::RevenueStrategy,
};
use tracing::{Level, event};

/// Build one accumulator per known seller from a dataset of receipts.
///
/// Every receipt credits its seller with one sale and its `total_amount` in
/// revenue. Every line adds `revenue - purchase_price × quantity` to the
/// seller's profit (revenue as priced by `strategy`) and its quantity to the
/// seller's per-sku counter.
///
/// A receipt is applied all at once: its seller and every product it lists
/// are resolved before anything is accumulated. Unresolvable receipts either
/// abort the aggregation or are dropped with a warning, according to `policy`.
///
/// The accumulators are returned in the order of the seller table, with
/// duplicate seller ids collapsed into their first position.
pub fn aggregate_purchases(
    dataset: &SalesDataset<'_>,
    strategy: &dyn RevenueStrategy,
    policy: UnknownIdPolicy,
) -> Result<Vec<SellerStats<Sku>>, AnalysisError> {
    let mut sellers = dataset
        .sellers
        .iter()
        .map(|seller| (&seller.id, SellerStats::new(seller.id.clone(), seller.display_name())))
        .collect::<Map<&SellerId, SellerStats<Sku>>>();

    let products = dataset
        .products
        .iter()
        .map(|product| (&product.sku, product))
        .collect::<Map<&Sku, &Product>>();

    let mut skipped = 0usize;

    for (index, record) in dataset.purchase_records.iter().enumerate() {
        let resolved = sellers
            .get_mut(&record.seller_id)
            .ok_or_else(|| AnalysisError::UnknownSeller {
                seller_id: record.seller_id.clone(),
            })
            .and_then(|stats| Ok((stats, resolve_items(record, &products)?)));

        let (stats, lines) = match resolved {
            Ok(resolved) => resolved,
            Err(error) => {
                skip_or_fail(policy, index, error)?;
                skipped += 1;
                continue;
            }
        };

        stats.totals.sales_count += 1;
        stats.totals.revenue += record.total_amount;

        for (item, product) in lines {
            let cost = product.purchase_price * item.quantity;
            let revenue = strategy.revenue(item, product);
            stats.totals.profit += revenue - cost;
            stats.products.accumulate(item.sku.clone(), item.quantity);
        }
    }

    event!(
        Level::DEBUG,
        sellers = sellers.len(),
        records = dataset.purchase_records.len(),
        skipped,
        "aggregated purchase records"
    );

    Ok(sellers.into_iter().map(|(_, stats)| stats).collect())
}

/// Build one accumulator per seller appearing in a flat sale array.
///
/// Accumulators are created on a seller's first sale, named after that
/// sale's `seller_name`, and returned in order of first appearance. Revenue
/// and profit are added as given; each product's revenue is accumulated
/// under its product id.
pub fn aggregate_flat_sales(sales: &[FlatSale]) -> Vec<SellerStats<ProductId>> {
    let mut sellers = Map::<&SellerId, SellerStats<ProductId>>::default();

    for sale in sales {
        let stats = sellers.entry(&sale.seller_id).or_insert_with(|| {
            SellerStats::new(sale.seller_id.clone(), sale.seller_name.clone())
        });

        stats.totals.sales_count += 1;
        stats.totals.revenue += sale.revenue;
        stats.totals.profit += sale.profit;
        stats.products.accumulate(sale.product_id.clone(), sale.revenue);
    }

    event!(
        Level::DEBUG,
        sellers = sellers.len(),
        records = sales.len(),
        "aggregated flat sales"
    );

    sellers.into_iter().map(|(_, stats)| stats).collect()
}

/// Pair every line of a receipt with its catalog entry
fn resolve_items<'a>(
    record: &'a PurchaseRecord,
    products: &Map<&Sku, &'a Product>,
) -> Result<Vec<(&'a LineItem, &'a Product)>, AnalysisError> {
    record
        .items
        .iter()
        .map(|item| match products.get(&item.sku) {
            Some(product) => Ok((item, *product)),
            None => Err(AnalysisError::UnknownProduct {
                sku: item.sku.clone(),
                seller_id: record.seller_id.clone(),
            }),
        })
        .collect()
}

fn skip_or_fail(
    policy: UnknownIdPolicy,
    index: usize,
    error: AnalysisError,
) -> Result<(), AnalysisError> {
    match policy {
        UnknownIdPolicy::Fail => Err(error),
        UnknownIdPolicy::Skip => {
            event!(Level::WARN, record = index, %error, "skipping purchase record");
            Ok(())
        }
    }
}
