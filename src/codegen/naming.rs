use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How table and column names become type and field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// Names are used exactly as the catalog reports them.
    #[default]
    Verbatim,
    PascalCase,
}

impl NamingStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NamingStyle::Verbatim => "verbatim",
            NamingStyle::PascalCase => "pascal_case",
        }
    }

    pub fn apply(self, name: &str) -> Cow<'_, str> {
        match self {
            NamingStyle::Verbatim => Cow::Borrowed(name),
            NamingStyle::PascalCase => Cow::Owned(to_pascal_case(name)),
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(NamingStyle::Verbatim),
            "pascal_case" | "pascal" => Ok(NamingStyle::PascalCase),
            other => Err(format!(
                "unknown naming style '{other}'; expected verbatim or pascal_case"
            )),
        }
    }
}

/// Splits on `_` and spaces, upper-cases the first letter of each word and
/// lower-cases the rest: `order_DETAILS` becomes `OrderDetails`.
pub fn to_pascal_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for part in value.split(['_', ' ']) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for ch in chars {
                out.extend(ch.to_lowercase());
            }
        }
    }
    out
}
