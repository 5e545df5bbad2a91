use serde::Serialize;

use flavorstock_core::{DomainError, DomainResult, Entity, FlavorId};

/// Stock every flavor starts with.
pub const INITIAL_STOCK: u64 = 10;

/// Flavor record: the single inventory resource.
///
/// `id` and `name` are fixed at creation. `stock` moves only through
/// [`Flavor::apply_adjustment`], and `deleted` only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flavor {
    id: FlavorId,
    name: String,
    stock: u64,
    deleted: bool,
}

impl Flavor {
    pub(crate) fn new(id: FlavorId, name: String) -> Self {
        Self {
            id,
            name,
            stock: INITIAL_STOCK,
            deleted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Apply a resolved amount in the given direction, returning the new stock.
    ///
    /// On error the record is left untouched.
    pub(crate) fn apply_adjustment(
        &mut self,
        direction: StockDirection,
        amount: u64,
    ) -> DomainResult<u64> {
        let new_stock = match direction {
            StockDirection::Buy => self
                .stock
                .checked_sub(amount)
                .ok_or_else(|| DomainError::insufficient_stock(amount, self.stock))?,
            StockDirection::Restock => self
                .stock
                .checked_add(amount)
                .ok_or_else(|| DomainError::invariant("stock overflow"))?,
        };
        self.stock = new_stock;
        Ok(new_stock)
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}

impl Entity for Flavor {
    type Id = FlavorId;

    fn id(&self) -> FlavorId {
        self.id
    }
}

/// Which way a stock adjustment moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockDirection {
    /// Customer purchase: decrements stock, never below zero.
    Buy,
    /// Replenishment: increments stock.
    Restock,
}

impl StockDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            StockDirection::Buy => "buy",
            StockDirection::Restock => "restock",
        }
    }
}

/// Turn a caller-supplied amount into a quantity.
///
/// Missing or NaN amounts are "not numeric". Zero, negative, fractional and
/// infinite amounts are refused as well, so a buy can never act as a restock
/// (or the other way around).
pub fn resolve_amount(raw: Option<f64>) -> DomainResult<u64> {
    let amount = match raw {
        Some(v) if !v.is_nan() => v,
        _ => return Err(DomainError::validation("amount is required and must be numeric")),
    };

    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if !amount.is_finite() || amount <= 0.0 || amount.fract() != 0.0 || amount >= u64::MAX as f64 {
        return Err(DomainError::validation(
            "amount must be a positive whole number",
        ));
    }

    Ok(amount as u64)
}
