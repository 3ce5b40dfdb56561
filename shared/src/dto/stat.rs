use std::collections::BTreeMap;
use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::view::sort::SortValue;

/// One stat cell as the backend sends it.
///
/// Integer stats arrive as JSON numbers, decimal stats as strings
/// (`"64.50"`). Anything that is not a number, or is absent, reads as no value
/// and renders as the `0` placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatNumber(pub Option<f64>);

impl StatNumber {
    pub fn value(self) -> Option<f64> {
        self.0
    }
}

impl fmt::Display for StatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("0"),
            Some(v) if v.fract() == 0.0 => write!(f, "{}", v as i64),
            Some(v) => write!(f, "{:.2}", v),
        }
    }
}

impl From<StatNumber> for SortValue {
    fn from(stat: StatNumber) -> Self {
        stat.0.into()
    }
}

impl From<f64> for StatNumber {
    fn from(value: f64) -> Self {
        Self(Some(value))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStat {
    Number(f64),
    Text(String),
    Flag(bool),
    Null(()),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for StatNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawStat::deserialize(deserializer)?;
        Ok(match raw {
            RawStat::Number(n) => StatNumber(Some(n)),
            RawStat::Text(s) => StatNumber(s.trim().parse::<f64>().ok().filter(|n| n.is_finite())),
            RawStat::Flag(_) | RawStat::Null(()) | RawStat::Other(_) => StatNumber(None),
        })
    }
}

impl Serialize for StatNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// A keyed set of stats, e.g. one team stat group or a rank snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatLine(pub BTreeMap<String, StatNumber>);

impl StatLine {
    /// Value for `key`; unknown keys read as no value.
    pub fn get(&self, key: &str) -> StatNumber {
        self.0.get(key).copied().unwrap_or_default()
    }
}
