use serde::{Deserialize, Serialize};
use serde_json::Value;

use flavorstock_inventory::Flavor;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct CreateFlavorRequest {
    #[serde(default, alias = "flavor")]
    pub name: Option<Value>,
}

impl CreateFlavorRequest {
    /// The name, if it is a non-blank string.
    pub fn name(&self) -> Option<&str> {
        match self.name.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Body of buy/restock requests.
#[derive(Debug, Default, Deserialize)]
pub struct StockAdjustmentRequest {
    #[serde(default, alias = "count")]
    pub amount: Option<Value>,
}

impl StockAdjustmentRequest {
    /// The amount as a number, if it is one.
    ///
    /// Numeric strings (`"3"`) count as numbers; anything else is treated as missing.
    pub fn amount(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
            _ => None,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct FlavorListResponse {
    pub items: Vec<Flavor>,
    pub count: usize,
}

impl From<Vec<Flavor>> for FlavorListResponse {
    fn from(items: Vec<Flavor>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub stock: u64,
}
