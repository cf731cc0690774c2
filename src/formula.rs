//! Crafting formula module.
//!
//! A `Formula` describes how named, quantified input resources are
//! transformed into output resources. Application is probabilistic:
//! a single random draw selects one of four yield bands, and the
//! band's multiplier scales every output quantity. Higher proficiency
//! shrinks the failure and partial bands and widens the normal band.

use crate::error::CraftError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Highest proficiency level a formula can be constructed with.
pub const MAX_PROFICIENCY: u8 = 6;

/// Chance of a failed application at proficiency 0.
pub const INITIAL_FAILURE_RATE: f64 = 0.30;

/// Chance of a partial yield at proficiency 0.
pub const INITIAL_PARTIAL_OUTPUT_RATE: f64 = 0.25;

/// Chance of a normal yield at proficiency 0.
pub const INITIAL_NORMAL_OUTPUT_RATE: f64 = 0.45;

/// How much each proficiency level shifts the yield bands.
///
/// Each level subtracts this fraction from the failure and partial
/// bands and adds it to the normal band.
pub const PROFICIENCY_IMPACT: f64 = 0.05;

/// A named resource with a quantity, used for both formula inputs
/// and outputs.
///
/// # Examples
///
/// ```rust
/// use zzcraft::Ingredient;
///
/// let water = Ingredient {
///     name: String::from("Water"),
///     quantity: 2,
/// };
/// assert_eq!(water.quantity, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Resource name.
    pub name: String,

    /// Resource quantity. Always non-negative; validated at the
    /// formula construction boundary.
    pub quantity: u64,
}

/// Outcome band of a single formula application.
///
/// Exactly one band is selected per application by a uniform draw
/// over `[0, 100]`, checked against cumulative thresholds in the
/// fixed order failure, partial, normal, enhanced.
///
/// # Examples
///
/// ```rust
/// use zzcraft::Yield;
///
/// assert_eq!(Yield::Failure.multiplier(), 0.0);
/// assert_eq!(Yield::Partial.multiplier(), 0.75);
/// assert_eq!(Yield::Normal.multiplier(), 1.0);
/// assert_eq!(Yield::Enhanced.multiplier(), 1.10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yield {
    /// The application failed; outputs are zeroed.
    Failure,

    /// Partial yield at three quarters of the listed quantities.
    Partial,

    /// Normal yield at the listed quantities.
    Normal,

    /// Enhanced yield at 110% of the listed quantities.
    Enhanced,
}

impl Yield {
    /// Get the quantity multiplier for this yield band.
    ///
    /// Adjusted output quantities are `floor(quantity * multiplier)`.
    pub fn multiplier(self) -> f64 {
        match self {
            Yield::Failure => 0.0,
            Yield::Partial => 0.75,
            Yield::Normal => 1.0,
            Yield::Enhanced => 1.10,
        }
    }
}

/// A crafting formula: ordered inputs, ordered outputs, and a
/// proficiency level that tilts the yield odds.
///
/// Formulas are immutable once constructed. `Clone` produces a deep,
/// independent copy; two formulas never share storage.
///
/// # Examples
///
/// ```rust
/// use zzcraft::Formula;
///
/// let formula = Formula::new(
///     vec![("Water", 2), ("Carbon", 1)],
///     vec![("Glucose", 1)],
/// ).unwrap();
///
/// // Application rolls a yield band and renders the adjusted outputs.
/// let result = formula.apply(&mut rand::thread_rng());
/// assert!(result.contains("Glucose"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    inputs: Vec<Ingredient>,
    outputs: Vec<Ingredient>,
    proficiency: u8,
}

impl Formula {
    /// Create a formula from parallel `(name, quantity)` lists.
    ///
    /// Quantities are taken signed and validated here; construction
    /// fails on the first negative quantity. Proficiency starts at 0.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::NegativeQuantity`] if any input or output
    /// quantity is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{CraftError, Formula};
    ///
    /// let formula = Formula::new(vec![("Iron", 3)], vec![("Sword", 1)]).unwrap();
    /// assert_eq!(formula.proficiency(), 0);
    ///
    /// let err = Formula::new(vec![("Iron", -3)], vec![("Sword", 1)]).unwrap_err();
    /// assert!(matches!(err, CraftError::NegativeQuantity { .. }));
    /// ```
    pub fn new<N, I, O>(inputs: I, outputs: O) -> Result<Self, CraftError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, i64)>,
        O: IntoIterator<Item = (N, i64)>,
    {
        Ok(Self {
            inputs: collect_ingredients(inputs)?,
            outputs: collect_ingredients(outputs)?,
            proficiency: 0,
        })
    }

    /// Set the proficiency level, consuming and returning the formula.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::ProficiencyOutOfRange`] if `level` exceeds
    /// [`MAX_PROFICIENCY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Formula;
    ///
    /// let formula = Formula::new(vec![("Ore", 2)], vec![("Ingot", 1)])
    ///     .unwrap()
    ///     .with_proficiency(6)
    ///     .unwrap();
    /// assert_eq!(formula.proficiency(), 6);
    ///
    /// let rejected = formula.with_proficiency(7);
    /// assert!(rejected.is_err());
    /// ```
    pub fn with_proficiency(mut self, level: u8) -> Result<Self, CraftError> {
        if level > MAX_PROFICIENCY {
            return Err(CraftError::ProficiencyOutOfRange {
                level,
                max: MAX_PROFICIENCY,
            });
        }
        self.proficiency = level;
        Ok(self)
    }

    /// Get the current proficiency level.
    pub fn proficiency(&self) -> u8 {
        self.proficiency
    }

    /// Get the input list.
    pub fn inputs(&self) -> &[Ingredient] {
        &self.inputs
    }

    /// Get the output list.
    pub fn outputs(&self) -> &[Ingredient] {
        &self.outputs
    }

    /// Get the number of inputs.
    pub fn input_len(&self) -> usize {
        self.inputs.len()
    }

    /// Get the name of the input at `index`.
    ///
    /// Lenient read: an out-of-range index returns the empty string
    /// instead of failing. This intentionally differs from
    /// [`output_description`](Self::output_description), which is strict.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Formula;
    ///
    /// let formula = Formula::new(vec![("Water", 2)], vec![("Ice", 1)]).unwrap();
    /// assert_eq!(formula.input_name(0), "Water");
    /// assert_eq!(formula.input_name(5), "");
    /// ```
    pub fn input_name(&self, index: usize) -> &str {
        self.inputs
            .get(index)
            .map_or("", |ingredient| ingredient.name.as_str())
    }

    /// Get the quantity of the input at `index`.
    ///
    /// Lenient read: an out-of-range index returns 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Formula;
    ///
    /// let formula = Formula::new(vec![("Water", 2)], vec![("Ice", 1)]).unwrap();
    /// assert_eq!(formula.input_quantity(0), 2);
    /// assert_eq!(formula.input_quantity(5), 0);
    /// ```
    pub fn input_quantity(&self, index: usize) -> u64 {
        self.inputs
            .get(index)
            .map_or(0, |ingredient| ingredient.quantity)
    }

    /// Describe the output at `index` as `"<name>: <quantity>"`.
    ///
    /// Strict read: unlike the input accessors, an out-of-range index
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns [`CraftError::OutputIndexOutOfRange`] for an invalid index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Formula;
    ///
    /// let formula = Formula::new(vec![("Water", 2)], vec![("Ice", 1)]).unwrap();
    /// assert_eq!(formula.output_description(0).unwrap(), "Ice: 1");
    /// assert!(formula.output_description(1).is_err());
    /// ```
    pub fn output_description(&self, index: usize) -> Result<String, CraftError> {
        let output = self
            .outputs
            .get(index)
            .ok_or(CraftError::OutputIndexOutOfRange {
                index,
                len: self.outputs.len(),
            })?;
        Ok(format!("{}: {}", output.name, output.quantity))
    }

    /// Roll one yield band with the given generator.
    ///
    /// Band widths in percentage points are derived from the
    /// proficiency level:
    ///
    /// - failure: `30 - 5 * level`
    /// - partial: `25 - 5 * level`
    /// - normal: `45 + 5 * level`
    /// - enhanced: the remainder of the draw range
    ///
    /// A single draw uniform over `[0, 100]` is compared against the
    /// cumulative thresholds in that order. Thresholds are signed: at
    /// high proficiency the failure and partial bands collapse below
    /// zero and those outcomes become impossible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::{Formula, Yield};
    ///
    /// let formula = Formula::new(vec![("Ore", 2)], vec![("Ingot", 1)])
    ///     .unwrap()
    ///     .with_proficiency(6)
    ///     .unwrap();
    ///
    /// // At maximum proficiency the failure band is empty.
    /// let outcome = formula.roll_yield(&mut rand::thread_rng());
    /// assert_ne!(outcome, Yield::Failure);
    /// ```
    pub fn roll_yield<R: Rng + ?Sized>(&self, rng: &mut R) -> Yield {
        let level = f64::from(self.proficiency);
        let failure =
            (INITIAL_FAILURE_RATE * 100.0 - PROFICIENCY_IMPACT * level * 100.0) as i64;
        let partial =
            (INITIAL_PARTIAL_OUTPUT_RATE * 100.0 - PROFICIENCY_IMPACT * level * 100.0) as i64;
        let normal =
            (INITIAL_NORMAL_OUTPUT_RATE * 100.0 + PROFICIENCY_IMPACT * level * 100.0) as i64;

        let chance: i64 = rng.gen_range(0..=100);
        if chance < failure {
            Yield::Failure
        } else if chance < failure + partial {
            Yield::Partial
        } else if chance < failure + partial + normal {
            Yield::Normal
        } else {
            Yield::Enhanced
        }
    }

    /// Apply the formula: roll a yield band and render the adjusted
    /// outputs as `"<quantity> <name>"`, comma-joined.
    ///
    /// Adjusted quantities are floored after multiplication. This is a
    /// pure computation over the formula's own output list plus one
    /// random draw; it does not touch any external resource state.
    /// Consuming inputs is the executing plan's responsibility.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zzcraft::Formula;
    ///
    /// let formula = Formula::new(
    ///     vec![("Water", 2), ("Carbon", 1)],
    ///     vec![("Glucose", 1), ("Oxygen", 2)],
    /// ).unwrap();
    ///
    /// let result = formula.apply(&mut rand::thread_rng());
    /// assert!(result.contains("Glucose"));
    /// assert!(result.contains("Oxygen"));
    /// ```
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let multiplier = self.roll_yield(rng).multiplier();
        self.outputs
            .iter()
            .map(|output| {
                let adjusted = (output.quantity as f64 * multiplier) as u64;
                format!("{} {}", adjusted, output.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validate and collect a `(name, quantity)` list into ingredients.
fn collect_ingredients<N, L>(list: L) -> Result<Vec<Ingredient>, CraftError>
where
    N: Into<String>,
    L: IntoIterator<Item = (N, i64)>,
{
    list.into_iter()
        .map(|(name, quantity)| {
            let name = name.into();
            if quantity < 0 {
                return Err(CraftError::NegativeQuantity { name, quantity });
            }
            Ok(Ingredient {
                name,
                quantity: quantity as u64,
            })
        })
        .collect()
}
