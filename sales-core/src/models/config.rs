/// What to do with a purchase record that refers to a seller or product
/// missing from the reference tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UnknownIdPolicy {
    /// Abort the whole analysis with an error
    #[default]
    Fail,
    /// Drop the offending record entirely and log a warning
    Skip,
}

/// Every analysis runs with some context. This config describes it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawAnalysisConfig", into = "RawAnalysisConfig")
)]
pub struct AnalysisConfig {
    /// Cap on the length of each report's `top_products`. When `None`, the
    /// input shape decides: 10 for receipts, 3 for flat sales.
    pub top_products_limit: Option<usize>,
    /// Handling of records that refer to unknown sellers or products
    pub unknown_ids: UnknownIdPolicy,
}

impl AnalysisConfig {
    /// The `top_products` cap to use, given the input shape's own default
    pub fn top_products_limit_or(&self, default: usize) -> usize {
        self.top_products_limit.unwrap_or(default)
    }
}

// To allow partial configuration files, we create a "raw" version of our
// struct in which every field may be omitted. Serde (de)serializes the raw
// version and we convert it with .into().

/// The (de)serialization form of [`AnalysisConfig`]
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawAnalysisConfig {
    /// See [`AnalysisConfig::top_products_limit`]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub top_products_limit: Option<usize>,
    /// See [`AnalysisConfig::unknown_ids`]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unknown_ids: Option<UnknownIdPolicy>,
}

impl From<RawAnalysisConfig> for AnalysisConfig {
    fn from(value: RawAnalysisConfig) -> Self {
        Self {
            top_products_limit: value.top_products_limit,
            unknown_ids: value.unknown_ids.unwrap_or_default(),
        }
    }
}

impl From<AnalysisConfig> for RawAnalysisConfig {
    fn from(value: AnalysisConfig) -> Self {
        Self {
            top_products_limit: value.top_products_limit,
            unknown_ids: Some(value.unknown_ids),
        }
    }
}
