mod config;
mod dataset;
mod ids;
mod map;
mod purchase;
mod reference;
mod report;
mod sale;
mod stats;

pub use config::{AnalysisConfig, RawAnalysisConfig, UnknownIdPolicy};
pub use dataset::{RawSalesDataset, SalesDataset};
pub use ids::{CustomerId, ProductId, SellerId, Sku};
pub use map::Map;
pub use purchase::{LineItem, PurchaseRecord};
pub use reference::{Customer, Product, Seller};
pub use report::{ProductQuantity, ProductRevenue, SellerReport, TopProduct};
pub use sale::FlatSale;
pub use stats::{SellerStats, SellerTotals};
