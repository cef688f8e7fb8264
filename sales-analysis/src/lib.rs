#![warn(missing_docs)]
//! A pipeline that turns sales records into ranked seller performance reports.
//!
//! Two input shapes are accepted:
//!
//! - a [`RawSalesDataset`]: four arrays of customers, products, sellers and
//!   purchase records (receipts with line items), analyzed by
//!   [`analyze_sales_data`]. Reports list up to 10 products by units sold.
//! - a slice of [`FlatSale`]: sales already joined with their seller and
//!   carrying precomputed revenue and profit, analyzed by
//!   [`analyze_flat_sales`]. Reports list up to 3 products by revenue.
//!
//! Both run the same stages: validation, aggregation per seller, ranking by
//! profit with bonus assignment, and projection into [`SellerReport`]s. The
//! revenue and bonus formulas are supplied by the caller through
//! [`AnalysisOptions`]; see [`strategies`] for some ready-made ones.

use sales_core::{
    models::{
        AnalysisConfig, FlatSale, ProductQuantity, ProductRevenue, RawSalesDataset, SellerReport,
    },
    ports::{BonusStrategy, RevenueStrategy},
};
use tracing::{Level, event};

mod aggregate;
pub use aggregate::*;

mod error;
pub use error::*;

mod rank;
pub use rank::*;

mod report;
pub use report::*;

pub mod strategies;

mod validate;
pub use validate::*;

/// The number of products listed in a report built from receipts
pub const RECEIPT_TOP_PRODUCTS: usize = 10;

/// The number of products listed in a report built from flat sales
pub const FLAT_TOP_PRODUCTS: usize = 3;

/// The strategies and configuration an analysis runs with.
///
/// Strategies are optional here so that a missing one is reported as an
/// [`InvalidStrategyError`] rather than being impossible to express.
#[derive(Clone, Default)]
pub struct AnalysisOptions<'a> {
    /// Prices each line of a receipt; required by [`analyze_sales_data`]
    pub calculate_revenue: Option<&'a dyn RevenueStrategy>,
    /// Assigns each seller's bonus from its rank; always required
    pub calculate_bonus: Option<&'a dyn BonusStrategy>,
    /// Limits and unknown-id handling
    pub config: AnalysisConfig,
}

impl<'a> AnalysisOptions<'a> {
    /// Create options with both strategies and the default configuration
    pub fn new(revenue: &'a dyn RevenueStrategy, bonus: &'a dyn BonusStrategy) -> Self {
        Self {
            calculate_revenue: Some(revenue),
            calculate_bonus: Some(bonus),
            config: AnalysisConfig::default(),
        }
    }

    /// Replace the revenue strategy
    pub fn with_revenue(mut self, revenue: &'a dyn RevenueStrategy) -> Self {
        self.calculate_revenue = Some(revenue);
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus(mut self, bonus: &'a dyn BonusStrategy) -> Self {
        self.calculate_bonus = Some(bonus);
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }
}

/// Analyze a dataset of receipts.
///
/// The dataset is validated first, then the strategies. Every seller in the
/// seller table gets a report, including sellers without sales. Reports are
/// ordered by profit, highest first.
///
/// # Errors
///
/// - [`AnalysisError::InvalidData`] if `data` is absent or any of its arrays is absent or empty
/// - [`AnalysisError::InvalidStrategy`] if either strategy is missing
/// - [`AnalysisError::UnknownSeller`] / [`AnalysisError::UnknownProduct`] if a record
///   refers to an unknown id and the configuration says to fail
pub fn analyze_sales_data(
    data: Option<&RawSalesDataset>,
    options: &AnalysisOptions<'_>,
) -> Result<Vec<SellerReport<ProductQuantity>>, AnalysisError> {
    let dataset = validate_dataset(data)?;
    let (revenue, bonus) = validate_strategies(options)?;

    event!(
        Level::DEBUG,
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        records = dataset.purchase_records.len(),
        "analyzing sales data"
    );

    let sellers = aggregate_purchases(&dataset, revenue, options.config.unknown_ids)?;
    let ranked = rank_sellers(sellers, bonus);
    let limit = options.config.top_products_limit_or(RECEIPT_TOP_PRODUCTS);

    Ok(build_reports(ranked, limit))
}

/// Analyze a flat array of pre-joined sales.
///
/// Only the bonus strategy is used. Every seller appearing in at least one
/// sale gets a report, named after its first sale. Reports are ordered by
/// profit, highest first.
///
/// # Errors
///
/// - [`AnalysisError::InvalidData`] if `sales` is absent or empty
/// - [`AnalysisError::InvalidStrategy`] if the bonus strategy is missing
pub fn analyze_flat_sales(
    sales: Option<&[FlatSale]>,
    options: &AnalysisOptions<'_>,
) -> Result<Vec<SellerReport<ProductRevenue>>, AnalysisError> {
    let sales = validate_flat_sales(sales)?;
    let bonus = validate_bonus_strategy(options)?;

    event!(Level::DEBUG, records = sales.len(), "analyzing flat sales");

    let sellers = aggregate_flat_sales(sales);
    let ranked = rank_sellers(sellers, bonus);
    let limit = options.config.top_products_limit_or(FLAT_TOP_PRODUCTS);

    Ok(build_reports(ranked, limit))
}
