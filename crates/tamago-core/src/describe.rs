//! Qualitative mood description derived from the stats
//!
//! Three independent ladders, evaluated hunger, then happiness, then
//! energy. Each contributes at most one condition:
//!
//! | stat      | <= 20        | <= 40   | >= 80          |
//! |-----------|--------------|---------|----------------|
//! | hunger    | very hungry  | hungry  | -              |
//! | happiness | very sad     | sad     | very happy     |
//! | energy    | very tired   | tired   | full of energy |
//!
//! When no ladder fires the pet "feels good".

use crate::pet::PetRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One phrase of a pet description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    VeryHungry,
    Hungry,
    VerySad,
    Sad,
    VeryHappy,
    VeryTired,
    Tired,
    FullOfEnergy,
    FeelsGood,
}

impl Condition {
    pub fn phrase(&self) -> &'static str {
        match self {
            Condition::VeryHungry => "very hungry",
            Condition::Hungry => "hungry",
            Condition::VerySad => "very sad",
            Condition::Sad => "sad",
            Condition::VeryHappy => "very happy",
            Condition::VeryTired => "very tired",
            Condition::Tired => "tired",
            Condition::FullOfEnergy => "full of energy",
            Condition::FeelsGood => "feels good",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Ordered list of conditions; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description(Vec<Condition>);

impl Description {
    pub fn conditions(&self) -> &[Condition] {
        &self.0
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.0.contains(&condition)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, condition) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

/// Describe a pet's current state.
pub fn describe(pet: &PetRecord) -> Description {
    let mut conditions = Vec::with_capacity(3);

    if pet.hunger <= 20 {
        conditions.push(Condition::VeryHungry);
    } else if pet.hunger <= 40 {
        conditions.push(Condition::Hungry);
    }

    if pet.happiness <= 20 {
        conditions.push(Condition::VerySad);
    } else if pet.happiness <= 40 {
        conditions.push(Condition::Sad);
    } else if pet.happiness >= 80 {
        conditions.push(Condition::VeryHappy);
    }

    if pet.energy <= 20 {
        conditions.push(Condition::VeryTired);
    } else if pet.energy <= 40 {
        conditions.push(Condition::Tired);
    } else if pet.energy >= 80 {
        conditions.push(Condition::FullOfEnergy);
    }

    if conditions.is_empty() {
        conditions.push(Condition::FeelsGood);
    }

    Description(conditions)
}
