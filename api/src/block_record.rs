//! The block summary served by the collaborator.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Wire name of the block number field.
pub const BLOCK_NUMBER_KEY: &str = "latestBlockNumber";
/// Wire name of the block hash field.
pub const BLOCK_HASH_KEY: &str = "latestBlockHash";
/// Wire name of the timestamp field.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// One row of block metadata as returned by the collaborator.
///
/// The object is kept exactly as received, keys in arrival order. Nothing is
/// required of its fields: an absent or oddly typed field reads as `None` from
/// the typed accessors and renders as whatever the collaborator sent.
/// Equality compares the payloads as received, so `"0x64"` and `100` differ.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockRecord(Map<String, Value>);

impl BlockRecord {
    pub fn new(block_number: u64, block_hash: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(BLOCK_NUMBER_KEY.to_string(), Value::from(block_number));
        fields.insert(BLOCK_HASH_KEY.to_string(), Value::String(block_hash.into()));
        fields.insert(TIMESTAMP_KEY.to_string(), Value::String(timestamp.into()));
        Self(fields)
    }

    /// The block number, from a JSON integer or a quantity string. The
    /// collaborator learns it from `eth_getBlockByHash`, which reports it as
    /// `0x`-prefixed hex.
    pub fn block_number(&self) -> Option<u64> {
        match self.0.get(BLOCK_NUMBER_KEY)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => parse_quantity(s),
            _ => None,
        }
    }

    pub fn block_hash(&self) -> Option<String> {
        self.text(BLOCK_HASH_KEY)
    }

    /// In whatever format the collaborator chose; numbers are shown as sent.
    pub fn timestamp(&self) -> Option<String> {
        self.text(TIMESTAMP_KEY)
    }

    /// Keys in arrival order.
    pub fn keys(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Looks up a field by its wire name.
    pub fn value(&self, key: &str) -> Option<Value> {
        self.0.get(key).cloned()
    }

    /// A field as display text: strings bare, other JSON values in JSON form,
    /// `None` when absent or null.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for BlockRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn parse_quantity(s: &str) -> Option<u64> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
