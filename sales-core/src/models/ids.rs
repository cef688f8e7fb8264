use std::fmt;

// Identifiers arrive from hand-written fixtures and exports alike, sometimes
// as strings ("seller_1") and sometimes as bare integers (1). Both are kept
// as strings; integers are stored in their decimal form.

macro_rules! string_wrapper {
    ($struct:ident) => {
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
        #[doc = concat!("A newtype wrapper for ", stringify!($struct))]
        pub struct $struct(String);

        impl $struct {
            /// View the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<u64> for $struct {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $struct {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                serde_untagged::UntaggedEnumVisitor::new()
                    .string(|value| Ok(Self(value.to_owned())))
                    .i64(|value| Ok(Self(value.to_string())))
                    .u64(|value| Ok(Self(value.to_string())))
                    .deserialize(deserializer)
            }
        }
    };
}

string_wrapper!(SellerId);
string_wrapper!(CustomerId);
string_wrapper!(ProductId);
string_wrapper!(Sku);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let id: SellerId = serde_json::from_str(r#""seller_1""#).unwrap();
        assert_eq!(id.as_str(), "seller_1");
    }

    #[test]
    fn test_from_integer() {
        let id: SellerId = serde_json::from_str("17").unwrap();
        assert_eq!(id, SellerId::from(17u64));
    }

    #[test]
    fn test_rejects_other_values() {
        assert!(serde_json::from_str::<Sku>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Sku>("1.5").is_err());
    }

    #[test]
    fn test_to_string() {
        match serde_json::to_value(ProductId::from("x")) {
            Ok(serde_json::Value::String(value)) => assert_eq!(value, "x"),
            Ok(_) => panic!("id serialized incorrectly"),
            Err(_) => panic!("could not serialize id"),
        }
    }
}
