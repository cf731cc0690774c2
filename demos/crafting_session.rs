//! Crafting session example: stepwise plan execution
//!
//! This example demonstrates:
//! - Assembling an executable plan from several formulas
//! - Seeding a stockpile and driving the plan to completion
//! - Recovering from a resource shortfall by restocking

use zzcraft::*;

fn main() -> Result<(), CraftError> {
    let photosynthesis = Formula::new(
        vec![("Water", 2), ("Carbon", 1)],
        vec![("Glucose", 1)],
    )?;
    let respiration = Formula::new(
        vec![("Glucose", 1), ("Sunlight", 1)],
        vec![("Oxygen", 2), ("Energy", 1)],
    )?;

    let mut plan = ExecutablePlan::new(vec![photosynthesis, respiration]);

    let mut stockpile = Stockpile::new();
    stockpile.add_resource("Water", 2);
    stockpile.add_resource("Carbon", 2);
    stockpile.add_resource("Sunlight", 1);

    let mut rng = rand::thread_rng();

    println!("Executing {} steps...\n", plan.len());
    while !plan.is_exhausted() {
        let step = plan.current_step() + 1;
        match plan.apply(&mut stockpile, &mut rng) {
            Ok(_) => println!("Step {} done.", step),
            Err(CraftError::InsufficientResources {
                name,
                required,
                available,
            }) => {
                // Restock the missing resource and retry the same step.
                let shortfall = required - available;
                println!(
                    "Step {} short on {} (need {}, have {}); adding {}.",
                    step, name, required, available, shortfall
                );
                stockpile.add_resource(name, shortfall);
            }
            Err(other) => return Err(other),
        }
    }

    println!("\nApply results:");
    for result in stockpile.apply_results() {
        println!("  {}", result);
    }

    println!("\nRemaining stock:");
    for (name, quantity) in stockpile.resources() {
        println!("  {}: {}", name, quantity);
    }

    Ok(())
}
