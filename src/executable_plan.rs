//! Stepwise plan execution module.
//!
//! An `ExecutablePlan` wraps a [`Plan`] with a cursor marking how many
//! formulas have been executed. The cursor gates editing: completed
//! steps are immutable history, and execution stops once the cursor
//! reaches the end of the plan.

use crate::error::CraftError;
use crate::formula::Formula;
use crate::plan::Plan;
use crate::stockpile::Stockpile;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A plan with an execution cursor.
///
/// The cursor starts at 0, advances by exactly 1 per successfully
/// executed step, and never exceeds the formula count. Indices below
/// the cursor are completed and can no longer be replaced.
///
/// # Examples
///
/// ```rust
/// use zzcraft::{ExecutablePlan, Formula, Stockpile};
///
/// let formula = Formula::new(vec![("Water", 2), ("Carbon", 1)], vec![("Glucose", 1)]).unwrap();
/// let mut plan = ExecutablePlan::new(vec![formula]);
///
/// let mut stockpile = Stockpile::new();
/// stockpile.add_resource("Water", 2);
/// stockpile.add_resource("Carbon", 2);
///
/// plan.apply(&mut stockpile, &mut rand::thread_rng()).unwrap();
///
/// assert_eq!(plan.current_step(), 1);
/// assert_eq!(stockpile.quantity("Water"), 0);
/// assert_eq!(stockpile.quantity("Carbon"), 1);
/// assert_eq!(stockpile.apply_results().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutablePlan {
    plan: Plan,
    current_step: usize,
}

impl ExecutablePlan {
    /// Create an executable plan from an initial batch of formulas.
    ///
    /// The cursor starts at 0.
    pub fn new(formulas: Vec<Formula>) -> Self {
        Self::from_plan(Plan::new(formulas))
    }

    /// Wrap an existing plan for execution.
    pub fn from_plan(plan: Plan) -> Self {
        Self {
            plan,
            current_step: 0,
        }
    }

    /// Get the index of the next unexecuted step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Check whether every step has been executed.
    pub fn is_exhausted(&self) -> bool {
        self.current_step >= self.plan.len()
    }

    /// Get the underlying formula sequence.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Get the number of formulas.
    pub fn len(&self) -> usize {
        self.plan.len()
    }

    /// Check whether the plan holds no formulas.
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Get the formula at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Formula> {
        self.plan.get(index)
    }

    /// Append a formula at the end of the plan.
    ///
    /// Always allowed: new steps land after the cursor, even on an
    /// exhausted plan, which then becomes executable again.
    pub fn add(&mut self, formula: Formula) {
        self.plan.add(formula);
    }

    /// Apply the current formula without touching any stockpile and
    /// advance the cursor.
    ///
    /// Pure step execution: the formula's yield is rolled and
    /// rendered, but no resources are checked or consumed.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::PlanExhausted`] if the cursor has reached
    /// the end of the plan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{ExecutablePlan, Formula};
    ///
    /// let formula = Formula::new(vec![("Ore", 1)], vec![("Ingot", 1)]).unwrap();
    /// let mut plan = ExecutablePlan::new(vec![formula]);
    ///
    /// let result = plan.apply_current_formula(&mut rand::thread_rng()).unwrap();
    /// assert!(result.contains("Ingot"));
    /// assert!(plan.apply_current_formula(&mut rand::thread_rng()).is_err());
    /// ```
    pub fn apply_current_formula<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, CraftError> {
        let formula = self
            .plan
            .get(self.current_step)
            .ok_or(CraftError::PlanExhausted)?;
        let result = formula.apply(rng);
        self.current_step += 1;
        Ok(result)
    }

    /// Execute the current step against a stockpile.
    ///
    /// Every input of the current formula is checked against the
    /// stockpile before anything is consumed; a shortfall fails the
    /// whole step with no mutation. On success the inputs are
    /// consumed, the formula is applied, the result is appended to the
    /// stockpile's log, and the cursor advances. The mutated stockpile
    /// borrow is handed back for chaining.
    ///
    /// # Errors
    ///
    /// - [`CraftError::PlanExhausted`] if the cursor has reached the
    ///   end of the plan.
    /// - [`CraftError::InsufficientResources`] on the first input the
    ///   stockpile cannot cover; the stockpile is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{CraftError, ExecutablePlan, Formula, Stockpile};
    ///
    /// let thirsty = Formula::new(vec![("Water", 10)], vec![("Steam", 4)]).unwrap();
    /// let mut plan = ExecutablePlan::new(vec![thirsty]);
    ///
    /// let mut stockpile = Stockpile::new();
    /// stockpile.add_resource("Water", 2);
    ///
    /// let err = plan.apply(&mut stockpile, &mut rand::thread_rng()).unwrap_err();
    /// assert!(matches!(err, CraftError::InsufficientResources { .. }));
    /// assert_eq!(stockpile.quantity("Water"), 2); // untouched
    /// assert_eq!(plan.current_step(), 0);
    /// ```
    pub fn apply<'a, R: Rng + ?Sized>(
        &mut self,
        stockpile: &'a mut Stockpile,
        rng: &mut R,
    ) -> Result<&'a mut Stockpile, CraftError> {
        let formula = self
            .plan
            .get(self.current_step)
            .ok_or(CraftError::PlanExhausted)?;

        // Full feasibility scan before any consumption.
        for input in formula.inputs() {
            let available = stockpile.quantity(&input.name);
            if available < input.quantity {
                return Err(CraftError::InsufficientResources {
                    name: input.name.clone(),
                    required: input.quantity,
                    available,
                });
            }
        }

        // Each consumption is covered by the scan above.
        for input in formula.inputs() {
            stockpile.consume_resource(&input.name, input.quantity);
        }

        stockpile.store_formula_result(formula.apply(rng));
        self.current_step += 1;
        Ok(stockpile)
    }

    /// Replace the formula at `index`, refusing to rewrite history.
    ///
    /// # Errors
    ///
    /// - [`CraftError::StepAlreadyExecuted`] if `index` is below the
    ///   cursor, regardless of whether the plan is exhausted.
    /// - [`CraftError::IndexOutOfRange`] if `index` is outside the
    ///   plan, from the underlying sequence.
    pub fn replace(&mut self, index: usize, formula: Formula) -> Result<(), CraftError> {
        if index < self.current_step {
            return Err(CraftError::StepAlreadyExecuted {
                index,
                current_step: self.current_step,
            });
        }
        self.plan.replace(index, formula)
    }

    /// Remove the last formula, unless the plan has fully completed.
    ///
    /// The guard checks whole-plan exhaustion (cursor at the end), not
    /// whether the last index specifically has been executed.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::StepAlreadyCompleted`] if the cursor has
    /// reached the end of the plan.
    pub fn remove(&mut self) -> Result<(), CraftError> {
        if self.current_step >= self.plan.len() {
            return Err(CraftError::StepAlreadyCompleted);
        }
        self.plan.remove();
        Ok(())
    }

    /// Advance the cursor by one without executing anything.
    ///
    /// No exhaustion check is performed: the cursor can be pushed past
    /// the end of the plan, after which execution fails with
    /// [`CraftError::PlanExhausted`]. This skips a step, it does not
    /// execute one; it is not a substitute for
    /// [`apply`](Self::apply) or
    /// [`apply_current_formula`](Self::apply_current_formula).
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Render the whole underlying plan.
    ///
    /// Like [`Plan::render`], this re-rolls every formula's yield and
    /// ignores the cursor.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.plan.render(rng)
    }

    /// Compare two executable plans by cursor position only.
    ///
    /// This is a progress ordering, distinct from the underlying
    /// sequence's size ordering ([`Plan::cmp_len`]): a two-step plan
    /// at step 2 ranks above a ten-step plan at step 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use zzcraft::{ExecutablePlan, Formula};
    ///
    /// let formula = Formula::new(vec![("A", 1)], vec![("B", 1)]).unwrap();
    /// let mut started = ExecutablePlan::new(vec![formula.clone()]);
    /// let fresh = ExecutablePlan::new(vec![formula.clone(), formula]);
    ///
    /// started.apply_current_formula(&mut rand::thread_rng()).unwrap();
    /// assert_eq!(started.cmp_progress(&fresh), Ordering::Greater);
    /// ```
    pub fn cmp_progress(&self, other: &ExecutablePlan) -> Ordering {
        self.current_step.cmp(&other.current_step)
    }
}
