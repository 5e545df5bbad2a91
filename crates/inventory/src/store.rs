use std::sync::{Arc, PoisonError, RwLock};

use flavorstock_core::{DomainError, DomainResult, Entity, FlavorId};

use crate::flavor::{Flavor, StockDirection, resolve_amount};

/// Owner of all flavor records.
///
/// Every operation is atomic with respect to the others: a buy can never
/// observe a stale stock value, and concurrent creates never share an id.
/// Returned records are snapshots; mutating the store afterwards does not
/// change them.
pub trait FlavorStore: Send + Sync {
    /// Append a new flavor with the next id and the initial stock.
    fn create(&self, name: &str) -> DomainResult<Flavor>;

    /// All non-deleted flavors, in creation order.
    fn list_active(&self) -> Vec<Flavor>;

    /// Look up a live flavor. Deleted records are reported as `NotFound`.
    fn find_by_id(&self, id: FlavorId) -> DomainResult<Flavor>;

    /// Resolve `amount`, then the record, then move its stock. Returns the new stock.
    ///
    /// The amount is checked before the id, so a request that is wrong on
    /// both counts gets the amount error.
    fn adjust_stock(
        &self,
        id: FlavorId,
        amount: Option<f64>,
        direction: StockDirection,
    ) -> DomainResult<u64>;

    /// Flag a live flavor as deleted and return it as it now stands.
    fn soft_delete(&self, id: FlavorId) -> DomainResult<Flavor>;

    fn buy(&self, id: FlavorId, amount: Option<f64>) -> DomainResult<u64> {
        self.adjust_stock(id, amount, StockDirection::Buy)
    }

    fn restock(&self, id: FlavorId, amount: Option<f64>) -> DomainResult<u64> {
        self.adjust_stock(id, amount, StockDirection::Restock)
    }
}

impl<S> FlavorStore for Arc<S>
where
    S: FlavorStore + ?Sized,
{
    fn create(&self, name: &str) -> DomainResult<Flavor> {
        (**self).create(name)
    }

    fn list_active(&self) -> Vec<Flavor> {
        (**self).list_active()
    }

    fn find_by_id(&self, id: FlavorId) -> DomainResult<Flavor> {
        (**self).find_by_id(id)
    }

    fn adjust_stock(
        &self,
        id: FlavorId,
        amount: Option<f64>,
        direction: StockDirection,
    ) -> DomainResult<u64> {
        (**self).adjust_stock(id, amount, direction)
    }

    fn soft_delete(&self, id: FlavorId) -> DomainResult<Flavor> {
        (**self).soft_delete(id)
    }
}

#[derive(Debug)]
struct Inventory {
    next_id: FlavorId,
    flavors: Vec<Flavor>,
}

impl Inventory {
    /// Index of the live record with `id`, if any.
    fn position_live(&self, id: FlavorId) -> DomainResult<usize> {
        self.flavors
            .iter()
            .position(|f| f.id() == id && f.is_active())
            .ok_or_else(DomainError::not_found)
    }
}

/// In-memory, process-lifetime flavor store.
///
/// Records are append-only; deletion flips a flag and ids are never reused.
#[derive(Debug)]
pub struct InMemoryFlavorStore {
    inner: RwLock<Inventory>,
}

impl InMemoryFlavorStore {
    pub fn new() -> Self {
        Self::starting_at(FlavorId::FIRST)
    }

    fn starting_at(next_id: FlavorId) -> Self {
        Self {
            inner: RwLock::new(Inventory {
                next_id,
                flavors: Vec::new(),
            }),
        }
    }

    // Mutations only touch state after every check has passed, so a poisoned
    // lock still guards a consistent inventory.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryFlavorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlavorStore for InMemoryFlavorStore {
    fn create(&self, name: &str) -> DomainResult<Flavor> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let mut inv = self.write();
        let id = inv.next_id;
        inv.next_id = id
            .checked_next()
            .ok_or_else(|| DomainError::invariant("flavor id space exhausted"))?;

        let flavor = Flavor::new(id, name.to_string());
        inv.flavors.push(flavor.clone());
        Ok(flavor)
    }

    fn list_active(&self) -> Vec<Flavor> {
        self.read()
            .flavors
            .iter()
            .filter(|f| f.is_active())
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: FlavorId) -> DomainResult<Flavor> {
        let inv = self.read();
        let idx = inv.position_live(id)?;
        Ok(inv.flavors[idx].clone())
    }

    fn adjust_stock(
        &self,
        id: FlavorId,
        amount: Option<f64>,
        direction: StockDirection,
    ) -> DomainResult<u64> {
        let amount = resolve_amount(amount)?;

        let mut inv = self.write();
        let idx = inv.position_live(id)?;
        inv.flavors[idx].apply_adjustment(direction, amount)
    }

    fn soft_delete(&self, id: FlavorId) -> DomainResult<Flavor> {
        let mut inv = self.write();
        let idx = inv.position_live(id)?;
        let flavor = &mut inv.flavors[idx];
        flavor.mark_deleted();
        Ok(flavor.clone())
    }
}
