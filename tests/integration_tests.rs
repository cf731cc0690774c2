use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use zzcraft::*;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

/// Test a complete crafting run: two chained formulas executed in
/// order against one stockpile.
#[test]
fn test_complete_crafting_run() {
    let photosynthesis = Formula::new(
        vec![("Water", 2), ("Carbon", 1)],
        vec![("Glucose", 1)],
    )
    .unwrap();
    let respiration = Formula::new(
        vec![("Sunlight", 1)],
        vec![("Oxygen", 2), ("Energy", 1)],
    )
    .unwrap();

    let mut plan = ExecutablePlan::new(vec![photosynthesis, respiration]);

    let mut stockpile = Stockpile::new();
    stockpile.add_resource("Water", 2);
    stockpile.add_resource("Carbon", 2);
    stockpile.add_resource("Sunlight", 1);
    let mut rng = rng();

    // Step 1: photosynthesis consumes Water 2, Carbon 1.
    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert_eq!(stockpile.quantity("Water"), 0);
    assert_eq!(stockpile.quantity("Carbon"), 1);
    assert_eq!(plan.current_step(), 1);

    // Step 2: respiration consumes Sunlight 1.
    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert_eq!(stockpile.quantity("Sunlight"), 0);
    assert_eq!(plan.current_step(), 2);
    assert!(plan.is_exhausted());

    // One log entry per executed step, in execution order.
    let results = stockpile.apply_results();
    assert_eq!(results.len(), 2);
    assert!(results[0].contains("Glucose"));
    assert!(results[1].contains("Oxygen"));
    assert!(results[1].contains("Energy"));

    // A third step does not exist.
    assert_eq!(
        plan.apply(&mut stockpile, &mut rng).unwrap_err(),
        CraftError::PlanExhausted
    );
}

/// Test that a resource shortfall fails the step without consuming
/// anything or advancing the cursor.
#[test]
fn test_insufficient_resources_leave_ledger_unchanged() {
    let formula = Formula::new(vec![("Water", 10), ("Carbon", 5)], vec![("Oxygen", 4)]).unwrap();
    let mut plan = ExecutablePlan::new(vec![formula]);

    let mut stockpile = Stockpile::new();
    stockpile.add_resource("Water", 2); // not enough water
    stockpile.add_resource("Carbon", 5);
    let mut rng = rng();

    let err = plan.apply(&mut stockpile, &mut rng).unwrap_err();
    assert_eq!(
        err,
        CraftError::InsufficientResources {
            name: String::from("Water"),
            required: 10,
            available: 2,
        }
    );

    assert_eq!(stockpile.quantity("Water"), 2);
    assert_eq!(stockpile.quantity("Carbon"), 5);
    assert!(stockpile.apply_results().is_empty());
    assert_eq!(plan.current_step(), 0);
}

/// Test recovery after a shortfall: restocking makes the same step
/// succeed on retry.
#[test]
fn test_retry_after_restock() {
    let formula = Formula::new(vec![("Water", 10)], vec![("Steam", 4)]).unwrap();
    let mut plan = ExecutablePlan::new(vec![formula]);

    let mut stockpile = Stockpile::new();
    stockpile.add_resource("Water", 2);
    let mut rng = rng();

    assert!(plan.apply(&mut stockpile, &mut rng).is_err());

    stockpile.add_resource("Water", 8);
    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert_eq!(stockpile.quantity("Water"), 0);
    assert_eq!(plan.current_step(), 1);
}

/// Test that execution history gates replacement: an executed step is
/// frozen, the step at the cursor is still editable.
#[test]
fn test_replace_after_execution() {
    let first = Formula::new(vec![("A", 1)], vec![("B", 2)]).unwrap();
    let second = Formula::new(vec![("B", 1)], vec![("C", 1)]).unwrap();
    let mut plan = ExecutablePlan::new(vec![first, second]);

    let mut stockpile = Stockpile::new();
    stockpile.add_resource("A", 1);
    let mut rng = rng();

    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert_eq!(plan.current_step(), 1);

    // Index 0 is history now.
    let replacement = Formula::new(vec![("C", 3)], vec![("D", 4)]).unwrap();
    assert_eq!(
        plan.replace(0, replacement.clone()).unwrap_err(),
        CraftError::StepAlreadyExecuted {
            index: 0,
            current_step: 1,
        }
    );

    // Index 1 (at the cursor) is still open.
    plan.replace(1, replacement.clone()).unwrap();

    // The replacement executes against its own inputs.
    stockpile.add_resource("C", 3);
    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert_eq!(stockpile.quantity("C"), 0);
    assert_eq!(plan.get(1).unwrap(), &replacement);
}

/// Test that the pure step (no stockpile) and the resource-consuming
/// step drive the same cursor.
#[test]
fn test_mixed_pure_and_ledger_steps() {
    let first = Formula::new(vec![("A", 1)], vec![("B", 2)]).unwrap();
    let second = Formula::new(vec![("B", 1)], vec![("C", 1)]).unwrap();
    let mut plan = ExecutablePlan::new(vec![first, second]);
    let mut rng = rng();

    // Pure application ignores resources entirely.
    let result = plan.apply_current_formula(&mut rng).unwrap();
    assert!(result.contains('B'));
    assert_eq!(plan.current_step(), 1);

    // The ledger step picks up where the pure step left off.
    let mut stockpile = Stockpile::new();
    stockpile.add_resource("B", 1);
    plan.apply(&mut stockpile, &mut rng).unwrap();
    assert!(plan.is_exhausted());
    assert_eq!(stockpile.apply_results().len(), 1);
}

/// Test rendering a plan built up incrementally.
#[test]
fn test_render_whole_plan() {
    let mut plan = Plan::default();
    let mut rng = rng();
    assert_eq!(plan.render(&mut rng), "No formula");

    plan.add(Formula::new(vec![("Ore", 2)], vec![("Ingot", 1)]).unwrap());
    plan.add(Formula::new(vec![("Ingot", 1)], vec![("Blade", 1)]).unwrap());

    let rendered = plan.render(&mut rng);
    assert!(rendered.starts_with("Formula 1: "));
    assert!(rendered.contains("Formula 2: "));
    assert_eq!(rendered.lines().count(), 2);
}

/// Test that formulas and plans survive a serde round-trip intact.
#[test]
fn test_serde_round_trip() {
    let formula = Formula::new(vec![("Water", 2), ("Carbon", 1)], vec![("Glucose", 1)])
        .unwrap()
        .with_proficiency(3)
        .unwrap();

    let json = serde_json::to_string(&formula).unwrap();
    let back: Formula = serde_json::from_str(&json).unwrap();
    assert_eq!(formula, back);

    let plan = Plan::new(vec![formula.clone(), formula]);
    let json = serde_json::to_string(&plan).unwrap();
    let back: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
}

/// Test that an executable plan's cursor survives a serde round-trip.
#[test]
fn test_serde_round_trip_preserves_cursor() {
    let formula = Formula::new(vec![("A", 1)], vec![("B", 1)]).unwrap();
    let mut plan = ExecutablePlan::new(vec![formula.clone(), formula]);
    let mut rng = rng();
    plan.apply_current_formula(&mut rng).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let back: ExecutablePlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
    assert_eq!(back.current_step(), 1);
}
