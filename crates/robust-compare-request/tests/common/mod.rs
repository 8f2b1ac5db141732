//! Common test utilities for robust-compare-request tests

use serde::Deserialize;

/// Minimal stand-in for the table filter engine's expression type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableFilter {
    Equals { column: String, value: serde_json::Value },
    LessThan { column: String, value: f64 },
    Not { operand: Box<TableFilter> },
}
