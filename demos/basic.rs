//! Basic example: building a formula and applying it
//!
//! This example demonstrates:
//! - Constructing a formula from (name, quantity) lists
//! - Reading inputs and outputs back
//! - Rolling probabilistic applications

use zzcraft::*;

fn main() -> Result<(), CraftError> {
    // A photosynthesis-flavored recipe.
    let formula = Formula::new(
        vec![("Water", 2), ("Carbon", 1)],
        vec![("Glucose", 1)],
    )?;

    println!("Inputs:");
    for index in 0..formula.input_len() {
        println!(
            "  - {} x{}",
            formula.input_name(index),
            formula.input_quantity(index)
        );
    }

    println!("\nOutputs:");
    for index in 0..formula.outputs().len() {
        println!("  - {}", formula.output_description(index)?);
    }

    // Each application rolls one of four yield bands.
    let mut rng = rand::thread_rng();
    println!("\nApplying the formula five times:");
    for attempt in 1..=5 {
        println!("  attempt {}: {}", attempt, formula.apply(&mut rng));
    }

    // Proficiency tilts the odds away from failure.
    let practiced = formula.with_proficiency(MAX_PROFICIENCY)?;
    println!("\nAt proficiency {}:", practiced.proficiency());
    for attempt in 1..=5 {
        println!("  attempt {}: {}", attempt, practiced.apply(&mut rng));
    }

    Ok(())
}
