use super::{Customer, Product, PurchaseRecord, Seller};

/// The four-array input shape, exactly as a caller hands it over.
///
/// Every field is optional so that an absent array can be told apart from an
/// empty one during validation. Use the validator in `sales-analysis` to turn
/// this into a [`SalesDataset`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSalesDataset {
    /// Known customers
    #[cfg_attr(feature = "serde", serde(default))]
    pub customers: Option<Vec<Customer>>,
    /// The product catalog
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: Option<Vec<Product>>,
    /// Known sellers
    #[cfg_attr(feature = "serde", serde(default))]
    pub sellers: Option<Vec<Seller>>,
    /// The receipts to analyze
    #[cfg_attr(feature = "serde", serde(default))]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

impl RawSalesDataset {
    /// Assemble a dataset in which every array is present
    pub fn new(
        customers: Vec<Customer>,
        products: Vec<Product>,
        sellers: Vec<Seller>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            customers: Some(customers),
            products: Some(products),
            sellers: Some(sellers),
            purchase_records: Some(purchase_records),
        }
    }
}

/// A validated, borrowed view of a [`RawSalesDataset`] in which all four arrays
/// are present and non-empty.
#[derive(Clone, Copy, Debug)]
pub struct SalesDataset<'a> {
    /// Known customers
    pub customers: &'a [Customer],
    /// The product catalog
    pub products: &'a [Product],
    /// Known sellers
    pub sellers: &'a [Seller],
    /// The receipts to analyze
    pub purchase_records: &'a [PurchaseRecord],
}
