//! Formula sequence module.
//!
//! A `Plan` is an ordered, growable sequence of formulas. Insertion
//! order is execution order. Plans deep-copy on `Clone`; two plans
//! never share formula storage.

use crate::error::CraftError;
use crate::formula::Formula;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An ordered sequence of crafting formulas.
///
/// Storage is an owned growable vector, so `add` is amortized O(1)
/// with doubling growth and the count never exceeds the capacity.
///
/// # Examples
///
/// ```rust
/// use zzcraft::{Formula, Plan};
///
/// let melt = Formula::new(vec![("Ore", 2)], vec![("Ingot", 1)]).unwrap();
/// let forge = Formula::new(vec![("Ingot", 1)], vec![("Blade", 1)]).unwrap();
///
/// let mut plan = Plan::new(vec![melt]);
/// plan.add(forge);
/// assert_eq!(plan.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    formulas: Vec<Formula>,
}

impl Plan {
    /// Create a plan from an initial batch of formulas.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{Formula, Plan};
    ///
    /// let formula = Formula::new(vec![("Water", 1)], vec![("Ice", 1)]).unwrap();
    /// let plan = Plan::new(vec![formula]);
    /// assert_eq!(plan.len(), 1);
    /// ```
    pub fn new(formulas: Vec<Formula>) -> Self {
        Self { formulas }
    }

    /// Get the number of formulas in the plan.
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Check whether the plan holds no formulas.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Get the current storage capacity.
    ///
    /// The count is always at most the capacity; growth is amortized
    /// doubling on append and removal never shrinks it.
    pub fn capacity(&self) -> usize {
        self.formulas.capacity()
    }

    /// Get the formula at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Formula> {
        self.formulas.get(index)
    }

    /// Append a formula at the end of the plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{Formula, Plan};
    ///
    /// let mut plan = Plan::default();
    /// plan.add(Formula::new(vec![("Water", 1)], vec![("Ice", 1)]).unwrap());
    /// assert_eq!(plan.len(), 1);
    /// ```
    pub fn add(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }

    /// Remove the last formula.
    ///
    /// Silent no-op when the plan is empty; capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Plan;
    ///
    /// let mut plan = Plan::default();
    /// plan.remove(); // nothing to remove, nothing happens
    /// assert!(plan.is_empty());
    /// ```
    pub fn remove(&mut self) {
        self.formulas.pop();
    }

    /// Replace the formula at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::IndexOutOfRange`] if `index` is outside
    /// `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{Formula, Plan};
    ///
    /// let original = Formula::new(vec![("A", 1)], vec![("B", 2)]).unwrap();
    /// let replacement = Formula::new(vec![("C", 3)], vec![("D", 4)]).unwrap();
    ///
    /// let mut plan = Plan::new(vec![original]);
    /// plan.replace(0, replacement).unwrap();
    /// assert!(plan.replace(1, Formula::default()).is_err());
    /// ```
    pub fn replace(&mut self, index: usize, formula: Formula) -> Result<(), CraftError> {
        let len = self.formulas.len();
        let slot = self
            .formulas
            .get_mut(index)
            .ok_or(CraftError::IndexOutOfRange { index, len })?;
        *slot = formula;
        Ok(())
    }

    /// Render the whole plan by applying every formula in order.
    ///
    /// Returns `"No formula"` for an empty plan, otherwise one
    /// `"Formula N: <result>"` line per formula. Every call re-rolls
    /// every formula's yield, so two renders of the same plan will
    /// generally differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{Formula, Plan};
    ///
    /// let plan = Plan::default();
    /// assert_eq!(plan.render(&mut rand::thread_rng()), "No formula");
    /// ```
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.formulas.is_empty() {
            return String::from("No formula");
        }
        let mut output = String::new();
        for (index, formula) in self.formulas.iter().enumerate() {
            output.push_str(&format!("Formula {}: {}\n", index + 1, formula.apply(rng)));
        }
        output
    }

    /// Compare two plans by formula count only.
    ///
    /// This is a structural size ordering: content is ignored, so two
    /// plans with entirely different formulas but the same count
    /// compare equal here while `==` reports them unequal. Contrast
    /// with [`ExecutablePlan::cmp_progress`](crate::ExecutablePlan::cmp_progress),
    /// which orders by execution progress.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use zzcraft::{Formula, Plan};
    ///
    /// let short = Plan::default();
    /// let long = Plan::new(vec![
    ///     Formula::new(vec![("A", 1)], vec![("B", 1)]).unwrap(),
    /// ]);
    /// assert_eq!(short.cmp_len(&long), Ordering::Less);
    /// ```
    pub fn cmp_len(&self, other: &Plan) -> Ordering {
        self.formulas.len().cmp(&other.formulas.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn formula(input: &str, output: &str) -> Formula {
        Formula::new(vec![(input, 1)], vec![(output, 2)]).unwrap()
    }

    #[test]
    fn test_add_then_remove_restores_count() {
        let mut plan = Plan::new(vec![formula("A", "B")]);
        plan.add(formula("C", "D"));
        assert_eq!(plan.len(), 2);

        plan.remove();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut plan = Plan::default();
        plan.remove();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_remove_keeps_capacity() {
        let mut plan = Plan::default();
        plan.add(formula("A", "B"));
        plan.add(formula("C", "D"));
        let capacity = plan.capacity();

        plan.remove();
        assert_eq!(plan.capacity(), capacity);
        assert!(plan.len() <= plan.capacity());
    }

    #[test]
    fn test_replace_changes_only_target() {
        let mut plan = Plan::new(vec![formula("A", "B"), formula("C", "D")]);
        let untouched = plan.get(1).unwrap().clone();

        plan.replace(0, formula("X", "Y")).unwrap();
        assert_eq!(plan.get(0).unwrap(), &formula("X", "Y"));
        assert_eq!(plan.get(1).unwrap(), &untouched);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut plan = Plan::new(vec![formula("A", "B")]);
        assert_eq!(
            plan.replace(1, formula("X", "Y")).unwrap_err(),
            CraftError::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_render_empty() {
        let plan = Plan::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(plan.render(&mut rng), "No formula");
    }

    #[test]
    fn test_render_numbers_every_formula() {
        let plan = Plan::new(vec![formula("A", "B"), formula("C", "D")]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let rendered = plan.render(&mut rng);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Formula 1: "));
        assert!(lines[1].starts_with("Formula 2: "));
        assert!(lines[0].ends_with('B'));
        assert!(lines[1].ends_with('D'));
    }

    #[test]
    fn test_equality_is_content_based() {
        let a = Plan::new(vec![formula("A", "B"), formula("C", "D")]);
        let b = Plan::new(vec![formula("A", "B"), formula("C", "D")]);
        let c = Plan::new(vec![formula("C", "D"), formula("A", "B")]);

        // Reflexive, symmetric, order-sensitive.
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cmp_len_ignores_content() {
        let a = Plan::new(vec![formula("A", "B")]);
        let b = Plan::new(vec![formula("X", "Y")]);
        let longer = Plan::new(vec![formula("A", "B"), formula("C", "D")]);

        assert_eq!(a.cmp_len(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a.cmp_len(&longer), Ordering::Less);
        assert_eq!(longer.cmp_len(&a), Ordering::Greater);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Plan::new(vec![formula("A", "B")]);
        let copy = original.clone();

        original.replace(0, formula("X", "Y")).unwrap();
        assert_eq!(copy.get(0).unwrap(), &formula("A", "B"));
    }
}
