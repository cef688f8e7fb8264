use crate::{AnalysisOptions, InvalidDataError, InvalidStrategyError};
use sales_core::{
    models::{FlatSale, RawSalesDataset, SalesDataset},
    ports::{BonusStrategy, RevenueStrategy},
};

/// Check that all four arrays of a dataset are present and non-empty.
///
/// Arrays are checked in the order customers, products, sellers,
/// purchase_records, and the first failure is reported.
pub fn validate_dataset(
    data: Option<&RawSalesDataset>,
) -> Result<SalesDataset<'_>, InvalidDataError> {
    let data = data.ok_or(InvalidDataError::Missing)?;
    Ok(SalesDataset {
        customers: required("customers", data.customers.as_deref())?,
        products: required("products", data.products.as_deref())?,
        sellers: required("sellers", data.sellers.as_deref())?,
        purchase_records: required("purchase_records", data.purchase_records.as_deref())?,
    })
}

/// Check that a flat sale array is present and non-empty
pub fn validate_flat_sales(sales: Option<&[FlatSale]>) -> Result<&[FlatSale], InvalidDataError> {
    match sales {
        None => Err(InvalidDataError::Missing),
        Some([]) => Err(InvalidDataError::EmptySales),
        Some(sales) => Ok(sales),
    }
}

/// Extract both strategies, failing if either is missing
pub fn validate_strategies<'a>(
    options: &AnalysisOptions<'a>,
) -> Result<(&'a dyn RevenueStrategy, &'a dyn BonusStrategy), InvalidStrategyError> {
    let revenue = options
        .calculate_revenue
        .ok_or(InvalidStrategyError::MissingRevenue)?;
    let bonus = validate_bonus_strategy(options)?;
    Ok((revenue, bonus))
}

/// Extract the bonus strategy, failing if it is missing
pub fn validate_bonus_strategy<'a>(
    options: &AnalysisOptions<'a>,
) -> Result<&'a dyn BonusStrategy, InvalidStrategyError> {
    options
        .calculate_bonus
        .ok_or(InvalidStrategyError::MissingBonus)
}

fn required<'a, T>(
    name: &'static str,
    field: Option<&'a [T]>,
) -> Result<&'a [T], InvalidDataError> {
    match field {
        None => Err(InvalidDataError::MissingField(name)),
        Some([]) => Err(InvalidDataError::EmptyField(name)),
        Some(values) => Ok(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::models::{Customer, LineItem, Product, PurchaseRecord, Seller, SellerTotals};

    fn dataset() -> RawSalesDataset {
        RawSalesDataset::new(
            vec![Customer {
                id: "c1".into(),
                first_name: "Ann".to_owned(),
                last_name: "Lee".to_owned(),
            }],
            vec![Product::new("sku_1", 1.0, 2.0)],
            vec![Seller::new("s1", "Bob", "Ray")],
            vec![PurchaseRecord::new(
                "s1",
                vec![LineItem {
                    sku: "sku_1".into(),
                    quantity: 1.0,
                    discount: 0.0,
                    sale_price: 2.0,
                }],
                2.0,
            )],
        )
    }

    #[test]
    fn test_missing_dataset() {
        assert_eq!(validate_dataset(None).unwrap_err(), InvalidDataError::Missing);
    }

    #[test]
    fn test_valid_dataset() {
        let data = dataset();
        let dataset = validate_dataset(Some(&data)).unwrap();
        assert_eq!(dataset.sellers.len(), 1);
        assert_eq!(dataset.purchase_records.len(), 1);
    }

    #[test]
    fn test_missing_field() {
        let mut data = dataset();
        data.sellers = None;
        assert_eq!(
            validate_dataset(Some(&data)).unwrap_err(),
            InvalidDataError::MissingField("sellers")
        );
    }

    #[test]
    fn test_first_failing_field_reported() {
        let mut data = dataset();
        data.customers = Some(vec![]);
        data.purchase_records = None;
        assert_eq!(
            validate_dataset(Some(&data)).unwrap_err(),
            InvalidDataError::EmptyField("customers")
        );
    }

    #[test]
    fn test_flat_sales() {
        assert_eq!(validate_flat_sales(None).unwrap_err(), InvalidDataError::Missing);
        assert_eq!(
            validate_flat_sales(Some(&[][..])).unwrap_err(),
            InvalidDataError::EmptySales
        );
    }

    #[test]
    fn test_missing_strategies() {
        let bonus = |_: usize, _: usize, _: &SellerTotals| 0.0;

        let options = AnalysisOptions::default();
        assert_eq!(
            validate_strategies(&options).err(),
            Some(InvalidStrategyError::MissingRevenue)
        );

        let revenue = |item: &LineItem, _: &Product| item.quantity;
        let options = AnalysisOptions::default().with_revenue(&revenue);
        assert_eq!(
            validate_strategies(&options).err(),
            Some(InvalidStrategyError::MissingBonus)
        );

        let options = AnalysisOptions::default().with_bonus(&bonus);
        assert!(validate_bonus_strategy(&options).is_ok());
    }
}
