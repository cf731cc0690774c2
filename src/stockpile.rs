//! Resource ledger module.
//!
//! The `Stockpile` maps resource names to quantities and keeps an
//! append-only log of formula application results. It is exclusively
//! owned: the type deliberately does not implement `Clone`, so a
//! ledger can only ever be mutated through one live reference.

use serde::Serialize;
use std::collections::BTreeMap;

/// A mutable ledger of named resource quantities plus a log of
/// formula application results.
///
/// Missing resources read as quantity 0. Quantities can never go
/// negative: consumption is refused outright when the stock is short,
/// never clamped.
///
/// # Examples
///
/// ```rust
/// use zzcraft::Stockpile;
///
/// let mut stockpile = Stockpile::new();
/// stockpile.add_resource("Water", 3);
/// stockpile.add_resource("Water", 2);
///
/// assert_eq!(stockpile.quantity("Water"), 5);
/// assert_eq!(stockpile.quantity("Carbon"), 0);
///
/// assert!(stockpile.consume_resource("Water", 4));
/// assert!(!stockpile.consume_resource("Water", 4));
/// assert_eq!(stockpile.quantity("Water"), 1);
/// ```
#[derive(Debug, Default, Serialize)]
pub struct Stockpile {
    resources: BTreeMap<String, u64>,
    apply_results: Vec<String>,
}

impl Stockpile {
    /// Create an empty stockpile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a resource, initializing absent names.
    ///
    /// Repeated additions to the same name accumulate.
    pub fn add_resource(&mut self, name: impl Into<String>, quantity: u64) {
        *self.resources.entry(name.into()).or_insert(0) += quantity;
    }

    /// Consume `quantity` units of a resource.
    ///
    /// Decrements and returns `true` only when the current stock
    /// covers the full amount; otherwise returns `false` and leaves
    /// the stock untouched. Callers that need a hard failure check
    /// availability first, the way
    /// [`ExecutablePlan::apply`](crate::ExecutablePlan::apply) does.
    pub fn consume_resource(&mut self, name: &str, quantity: u64) -> bool {
        match self.resources.get_mut(name) {
            Some(current) if *current >= quantity => {
                *current -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Get the current quantity of a resource.
    ///
    /// Unknown names read as 0; this never fails.
    pub fn quantity(&self, name: &str) -> u64 {
        self.resources.get(name).copied().unwrap_or(0)
    }

    /// Append a formula application result to the log.
    pub fn store_formula_result(&mut self, result: impl Into<String>) {
        self.apply_results.push(result.into());
    }

    /// Get the log of formula application results, oldest first.
    ///
    /// Read-only view; the log can only grow through
    /// [`store_formula_result`](Self::store_formula_result).
    pub fn apply_results(&self) -> &[String] {
        &self.apply_results
    }

    /// Iterate over `(name, quantity)` pairs in name order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Stockpile;
    ///
    /// let mut stockpile = Stockpile::new();
    /// stockpile.add_resource("Water", 2);
    /// stockpile.add_resource("Carbon", 1);
    ///
    /// let listed: Vec<(&str, u64)> = stockpile.resources().collect();
    /// assert_eq!(listed, vec![("Carbon", 1), ("Water", 2)]);
    /// ```
    pub fn resources(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.resources
            .iter()
            .map(|(name, &quantity)| (name.as_str(), quantity))
    }
}
