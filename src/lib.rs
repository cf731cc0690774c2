//! # zzcraft - Proficiency-Driven Crafting Simulation Engine
//!
//! A crafting engine for step-based resource transformation:
//! - **Formula-driven** recipes (named inputs in, named outputs out)
//! - **Probabilistic** yields over four proficiency-tilted bands
//! - **Stepwise** plan execution with a cursor gating edits
//! - **All-or-nothing** resource consumption against a stockpile
//!
//! ## Core Concepts
//!
//! ### Crafting Pipeline
//!
//! Crafting flows through a simple pipeline:
//!
//! ```text
//! [Formula] → [ExecutablePlan] → [Stockpile]
//! ```
//!
//! 1. **Formulas** describe one transformation each
//! 2. **Plans** sequence formulas in execution order
//! 3. **ExecutablePlan** steps through the sequence, consuming
//!    resources from a **Stockpile** and logging each result
//!
//! ### Key Features
//!
//! - **Yield Bands**: each application rolls failure / partial /
//!   normal / enhanced; proficiency shifts the odds
//! - **Injectable Randomness**: every probabilistic operation takes a
//!   caller-supplied generator, so outcomes are seedable in tests
//! - **History Gating**: executed steps can no longer be replaced
//! - **No Partial Consumption**: a step either fully consumes its
//!   inputs or fails without touching the stockpile
//!
//! ## Example
//!
//! ```rust
//! use zzcraft::*;
//!
//! let photosynthesis = Formula::new(
//!     vec![("Water", 2), ("Carbon", 1)],
//!     vec![("Glucose", 1)],
//! )?;
//!
//! let mut plan = ExecutablePlan::new(vec![photosynthesis]);
//!
//! let mut stockpile = Stockpile::new();
//! stockpile.add_resource("Water", 2);
//! stockpile.add_resource("Carbon", 2);
//!
//! plan.apply(&mut stockpile, &mut rand::thread_rng())?;
//!
//! assert_eq!(plan.current_step(), 1);
//! assert_eq!(stockpile.quantity("Water"), 0);
//! assert_eq!(stockpile.quantity("Carbon"), 1);
//! assert_eq!(stockpile.apply_results().len(), 1);
//! # Ok::<(), zzcraft::CraftError>(())
//! ```
//!
//! ## Modules
//!
//! - [`formula`] - Crafting formulas and yield bands
//! - [`plan`] - Ordered formula sequences
//! - [`executable_plan`] - Stepwise execution with a cursor
//! - [`stockpile`] - Resource ledger and result log
//! - [`error`] - Error types

pub mod error;
pub mod executable_plan;
pub mod formula;
pub mod plan;
pub mod stockpile;

// Re-export main types for convenience
pub use error::CraftError;
pub use executable_plan::ExecutablePlan;
pub use formula::{Formula, Ingredient, Yield};
pub use plan::Plan;
pub use stockpile::Stockpile;

// Re-export yield tuning constants
pub use formula::{
    INITIAL_FAILURE_RATE, INITIAL_NORMAL_OUTPUT_RATE, INITIAL_PARTIAL_OUTPUT_RATE,
    MAX_PROFICIENCY, PROFICIENCY_IMPACT,
};
