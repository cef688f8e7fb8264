use sales_core::models::{SellerId, Sku};

/// The ways in which the input to an analysis can be malformed
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InvalidDataError {
    /// Error when no input was provided at all
    #[error("no sales data provided")]
    Missing,
    /// Error when one of the four required arrays is absent
    #[error("sales data is missing the `{0}` array")]
    MissingField(&'static str),
    /// Error when one of the four required arrays is empty
    #[error("sales data has an empty `{0}` array")]
    EmptyField(&'static str),
    /// Error when a flat sale array is empty
    #[error("no sales records provided")]
    EmptySales,
}

/// The ways in which the injected strategies can be unusable
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InvalidStrategyError {
    /// Error when no revenue strategy was supplied
    #[error("a revenue strategy is required")]
    MissingRevenue,
    /// Error when no bonus strategy was supplied
    #[error("a bonus strategy is required")]
    MissingBonus,
}

/// Any failure of an analysis. An analysis either produces every report or none.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Error when the input data is malformed
    #[error("invalid data: {0}")]
    InvalidData(#[from] InvalidDataError),
    /// Error when a required strategy is missing
    #[error("invalid strategy: {0}")]
    InvalidStrategy(#[from] InvalidStrategyError),
    /// Error when a purchase record refers to a seller absent from the seller table
    #[error("purchase record refers to unknown seller {seller_id}")]
    UnknownSeller {
        /// The unresolved seller
        seller_id: SellerId,
    },
    /// Error when a line item refers to a product absent from the catalog
    #[error("purchase record of seller {seller_id} refers to unknown product {sku}")]
    UnknownProduct {
        /// The unresolved product
        sku: Sku,
        /// The seller the record belongs to
        seller_id: SellerId,
    },
}
