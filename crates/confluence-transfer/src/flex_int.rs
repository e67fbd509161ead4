//! Flexible integer decoding for inconsistently typed id fields.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Integer that the API returns either as a JSON number or as a numeric
/// string, depending on the endpoint and deployment. Always re-serializes in
/// the canonical numeric form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlexInt(pub i64);

impl FlexInt {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Zero doubles as "unset" in creation requests.
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for FlexInt {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for FlexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FlexInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlexIntVisitor;

        impl Visitor<'_> for FlexIntVisitor {
            type Value = FlexInt;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FlexInt(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                i64::try_from(value)
                    .map(FlexInt)
                    .map_err(|_| E::custom(format!("integer {value} out of range")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .parse::<i64>()
                    .map(FlexInt)
                    .map_err(|_| E::custom(format!("invalid numeric string {value:?}")))
            }
        }

        deserializer.deserialize_any(FlexIntVisitor)
    }
}
