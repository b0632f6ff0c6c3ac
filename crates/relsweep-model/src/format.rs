use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Wire encoding of the release-history document.
///
/// The encoding is always selected explicitly by the caller; it is never
/// sniffed from the payload.
/// - `Structured` — JSON release list (`helm list --output json`).
/// - `Table`      — tab-delimited listing with a header row (`helm list`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    /// JSON document with a `Releases` array (default).
    Structured,
    /// Tab-delimited table, one release per row.
    Table,
}

impl Default for HistoryFormat {
    fn default() -> Self {
        Self::Structured
    }
}

impl FromStr for HistoryFormat {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "structured" | "json" => Ok(Self::Structured),
            "table" | "tabular" => Ok(Self::Table),
            _ => Err(ModelError::UnknownHistoryFormat(s.to_string())),
        }
    }
}

impl fmt::Display for HistoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HistoryFormat::Structured => "structured",
            HistoryFormat::Table => "table",
        };
        f.write_str(s)
    }
}

impl Serialize for HistoryFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HistoryFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_is_structured() {
        assert_eq!(HistoryFormat::default(), HistoryFormat::Structured);
    }

    #[test]
    fn parses_names_case_insensitive() {
        assert_eq!(
            HistoryFormat::from_str("structured").unwrap(),
            HistoryFormat::Structured
        );
        assert_eq!(
            HistoryFormat::from_str("JSON").unwrap(),
            HistoryFormat::Structured
        );
        assert_eq!(
            HistoryFormat::from_str("table").unwrap(),
            HistoryFormat::Table
        );
        assert_eq!(
            HistoryFormat::from_str(" Tabular ").unwrap(),
            HistoryFormat::Table
        );
    }

    #[test]
    fn rejects_unknown_encoding() {
        let bad = ["", "  ", "yaml", "csv", "structured-table", "auto"];

        for input in bad {
            let parsed = HistoryFormat::from_str(input);
            assert!(
                parsed.is_err(),
                "expected error for invalid HistoryFormat {input:?}, but got Ok"
            );
        }
    }

    #[test]
    fn display_returns_canonical_names() {
        assert_eq!(HistoryFormat::Structured.to_string(), "structured");
        assert_eq!(HistoryFormat::Table.to_string(), "table");
    }

    #[test]
    fn serde_roundtrip() {
        for fmt in [HistoryFormat::Structured, HistoryFormat::Table] {
            let json = serde_json::to_string(&fmt).unwrap();
            let parsed: HistoryFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(fmt, parsed, "serde roundtrip failed for {fmt:?}");
        }
    }

    #[test]
    fn serde_accepts_case_insensitive_input() {
        for input in ["table", "TABLE", "Table"] {
            let json = format!(r#""{input}""#);
            let parsed: HistoryFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, HistoryFormat::Table);
        }
    }
}
