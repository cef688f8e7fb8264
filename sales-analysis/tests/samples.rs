use approx::assert_abs_diff_eq;
use rstest::*;
use sales_analysis::{
    AnalysisOptions, analyze_sales_data,
    strategies::{ProfitTierBonus, SimpleRevenue},
};
use sales_core::models::{ProductQuantity, RawSalesDataset, SellerReport};
use std::{fs::File, io::BufReader, path::PathBuf};

// For every (input.json, output.json) pair in `./samples/**`,
//   1. Read in the sales dataset,
//   2. Read in the known-good reports,
//   3. Analyze the dataset with the receipt-price revenue and the default profit tiers,
//   4. Compare the reports to the known-good ones.
// Reports must appear in the same order; monetary fields are compared with
// an absolute tolerance, everything else exactly.

#[rstest]
fn analyze_sample(#[files("tests/samples/**/input.json")] input: PathBuf) {
    let mut output = input.clone();
    output.set_file_name("output.json");

    let dataset: RawSalesDataset =
        serde_json::from_reader(BufReader::new(File::open(input).unwrap())).unwrap();

    let reference: Vec<SellerReport<ProductQuantity>> =
        serde_json::from_reader(BufReader::new(File::open(output).unwrap())).unwrap();

    let bonus = ProfitTierBonus::default();
    let reports =
        analyze_sales_data(Some(&dataset), &AnalysisOptions::new(&SimpleRevenue, &bonus)).unwrap();

    cmp(&reports, &reference, 1e-9);
}

fn cmp(a: &[SellerReport<ProductQuantity>], b: &[SellerReport<ProductQuantity>], eps: f64) {
    assert_eq!(a.len(), b.len());
    for (r1, r2) in a.iter().zip(b.iter()) {
        assert_eq!(r1.seller_id, r2.seller_id);
        assert_eq!(r1.name, r2.name);
        assert_eq!(r1.sales_count, r2.sales_count);
        assert_abs_diff_eq!(r1.revenue, r2.revenue, epsilon = eps);
        assert_abs_diff_eq!(r1.profit, r2.profit, epsilon = eps);
        assert_abs_diff_eq!(r1.bonus, r2.bonus, epsilon = eps);
        assert_eq!(r1.top_products, r2.top_products);
    }
}
