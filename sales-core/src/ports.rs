mod bonus;
mod revenue;

pub use bonus::BonusStrategy;
pub use revenue::RevenueStrategy;
