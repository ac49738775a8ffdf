//! Care Session Example
//!
//! Demonstrates tamago with one pet over a simulated day.
//! Rules come from `rules.ron`, the pet lives in an in-memory database,
//! and time is advanced by hand so the run is reproducible.

use chrono::{Duration, TimeZone, Utc};
use tamago_core::{describe, Engine, PetId, PetRecord};
use tamago_db::{Keeper, Store};
use tamago_script::Loader;

fn print_pet(label: &str, pet: &PetRecord) {
    println!(
        "{:<22} hunger {:>3}/100  happiness {:>3}/100  energy {:>3}/100  level {} ({}/{} exp)  - {}",
        label,
        pet.hunger,
        pet.happiness,
        pet.energy,
        pet.level,
        pet.experience,
        pet.level_threshold(),
        describe(pet),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tamago Care Session Example ===\n");

    let mut loader = Loader::new();
    loader.load_str(include_str!("../rules.ron"))?;
    let engine = Engine::new(loader.finish());

    let keeper = Keeper::new(Store::in_memory()?, engine);
    let pet_id = PetId::new(1);

    let mut now = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).single().ok_or("bad start time")?;
    let pet = keeper.load_or_seed(pet_id, now)?;
    println!("No pet stored, seeded {} the {}.\n", pet.name, pet.species);
    print_pet("08:00 start", &pet);

    let schedule = [
        (0, "feed", Some(1001)),
        (30, "play", Some(1002)),
        (240, "pet", Some(1001)),
        (180, "dance", Some(1002)),
        (60, "play", Some(1002)),
        (360, "sleep", Some(1001)),
    ];

    for (minutes, action, actor) in schedule {
        now += Duration::minutes(minutes);
        let label = format!("{} {}", now.format("%H:%M"), action);
        match keeper.act(pet_id, action, actor, now) {
            Ok(outcome) => {
                print_pet(&label, &outcome.pet);
                if outcome.leveled_up {
                    println!("  * {} reached level {}!", outcome.pet.name, outcome.pet.level);
                }
                println!("  +{} exp", outcome.exp_gain);
            }
            Err(err) => println!("{:<22} rejected: {}", label, err),
        }
    }

    now += Duration::hours(8);
    let pet = keeper.refresh(pet_id, now)?;
    print_pet(&format!("{} overnight", now.format("%H:%M")), &pet);

    println!("\nRecent actions:");
    for entry in keeper.history(pet_id, 10)? {
        println!(
            "  {}  {:<6} by {:<6} +{} exp{}",
            entry.at.format("%H:%M"),
            entry.action,
            entry.actor.map(|a| a.to_string()).unwrap_or_default(),
            entry.exp_gain,
            if entry.leveled_up { "  (level up)" } else { "" },
        );
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
