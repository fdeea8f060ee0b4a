//! Ledger data model - movement records and the ordered ledger that holds them.
//!
//! The column set is fixed: every record carries a description, quantity, movement
//! direction, timestamp and sector. Serde names follow the ledger file header, which
//! is the canonical schema shared by the CSV store and the spreadsheet report.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header row of the ledger file and the report, in column order.
pub const COLUMNS: [&str; 5] = ["Descrição", "Quantidade", "Movimento", "Data", "Setor"];

/// Textual timestamp format used by every backend.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// Stock coming in
    #[serde(rename = "Entrada")]
    Inbound,
    /// Stock going out
    #[serde(rename = "Saída")]
    Outbound,
}

impl Movement {
    /// Stored label of this movement.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbound => "Entrada",
            Self::Outbound => "Saída",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Movement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entrada" => Ok(Self::Inbound),
            "Saída" => Ok(Self::Outbound),
            other => Err(format!("unknown movement '{other}'")),
        }
    }
}

/// Department a movement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// General warehouse
    #[serde(rename = "Almoxarifado")]
    Warehouse,
    /// Pharmacy
    #[serde(rename = "Farmácia")]
    Pharmacy,
}

impl Sector {
    /// Stored label of this sector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warehouse => "Almoxarifado",
            Self::Pharmacy => "Farmácia",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Almoxarifado" => Ok(Self::Warehouse),
            "Farmácia" => Ok(Self::Pharmacy),
            other => Err(format!("unknown sector '{other}'")),
        }
    }
}

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    /// Free-text product description, stored as typed
    #[serde(rename = "Descrição")]
    pub description: String,
    /// Quantity exactly as the user typed it; the sign does not follow the movement
    #[serde(rename = "Quantidade")]
    pub quantity: i64,
    /// Inbound or outbound
    #[serde(rename = "Movimento")]
    pub movement: Movement,
    /// Insertion time, second precision
    #[serde(rename = "Data", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    /// Department
    #[serde(rename = "Setor")]
    pub sector: Sector,
}

impl MovementRecord {
    /// Builds a record stamped with the current local time.
    #[must_use]
    pub fn new(description: String, quantity: i64, movement: Movement, sector: Sector) -> Self {
        Self {
            description,
            quantity,
            movement,
            timestamp: now(),
            sector,
        }
    }

    /// Timestamp in its stored textual form.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Case-insensitive description match.
    #[must_use]
    pub fn matches_description(&self, folded_query: &str) -> bool {
        self.description.to_lowercase() == folded_query
    }

    /// Cell values in column order, as displayed.
    #[must_use]
    pub fn cells(&self) -> [String; 5] {
        [
            self.description.clone(),
            self.quantity.to_string(),
            self.movement.to_string(),
            self.timestamp_text(),
            self.sector.to_string(),
        ]
    }
}

/// Current local time truncated to whole seconds.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Parses a timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
}

/// Ordered collection of movement records. Insertion order is preserved and
/// descriptions need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<MovementRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[MovementRecord] {
        &self.records
    }

    /// Iterator over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MovementRecord> {
        self.records.iter()
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: MovementRecord) {
        self.records.push(record);
    }

    /// Number of records whose description matches `query` ignoring case.
    #[must_use]
    pub fn count_matching(&self, query: &str) -> usize {
        let folded = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches_description(&folded))
            .count()
    }

    /// Copy of this ledger without any record whose description matches `query`
    /// ignoring case.
    #[must_use]
    pub fn without_description(&self, query: &str) -> Self {
        let folded = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| !record.matches_description(&folded))
            .cloned()
            .collect()
    }
}

impl From<Vec<MovementRecord>> for Ledger {
    fn from(records: Vec<MovementRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MovementRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = MovementRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a MovementRecord;
    type IntoIter = std::slice::Iter<'a, MovementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_timestamp(&text).map_err(serde::de::Error::custom)
    }
}
