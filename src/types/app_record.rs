use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ExtractError;

/// Whether the bundle declares the `voip` background mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VoipStatus {
    #[serde(rename = "VOIP-YES")]
    Yes,
    #[serde(rename = "VOIP-NO")]
    No,
}

impl VoipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoipStatus::Yes => "VOIP-YES",
            VoipStatus::No => "VOIP-NO",
        }
    }
}

impl fmt::Display for VoipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized row of output, derived from one `.ipa` archive.
///
/// Equality and hashing cover every field, so two archives that produce the
/// same six values collapse into a single record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppRecord {
    /// iTunes & App Store display name (`itemName`). May be absent.
    pub a: Option<String>,
    /// Home-screen display name, falling back to the bundle name.
    pub s: String,
    /// iTunes App Store ID.
    pub i: i64,
    /// File name of the `.ipa` archive.
    pub p: String,
    /// Bundle directory name without its `.app` extension.
    pub b: String,
    pub v: VoipStatus,
}

/// Typed value of a single record field, used for ordering and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Absent,
}

impl AppRecord {
    pub fn field(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::A => self
                .a
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Absent),
            Column::S => FieldValue::Text(&self.s),
            Column::I => FieldValue::Integer(self.i),
            Column::P => FieldValue::Text(&self.p),
            Column::B => FieldValue::Text(&self.b),
            Column::V => FieldValue::Text(self.v.as_str()),
        }
    }
}

/// Attribute codes accepted for output columns and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    A,
    S,
    I,
    P,
    B,
    V,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::A,
        Column::S,
        Column::I,
        Column::P,
        Column::B,
        Column::V,
    ];

    /// Columns written when none are requested.
    pub const DEFAULT_ORDER: [Column; 3] = [Column::A, Column::S, Column::I];

    pub fn code(&self) -> char {
        match self {
            Column::A => 'a',
            Column::S => 's',
            Column::I => 'i',
            Column::P => 'p',
            Column::B => 'b',
            Column::V => 'v',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Column::A => "iTunes & App Store Display Name",
            Column::S => "iOS Screen Display Name (when installed on device)",
            Column::I => "iTunes App Store ID",
            Column::P => "path to the .ipa file being parsed",
            Column::B => "bundle name of the .app inside the .ipa",
            Column::V => "VOIP-YES if the app declares the voip background mode, else VOIP-NO",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Column {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Column::A),
            "s" => Ok(Column::S),
            "i" => Ok(Column::I),
            "p" => Ok(Column::P),
            "b" => Ok(Column::B),
            "v" => Ok(Column::V),
            other => Err(ExtractError::Configuration(format!(
                "'{other}' is not an available attribute"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "tests/app_record_tests.rs"]
mod tests;
