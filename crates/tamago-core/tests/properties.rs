use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tamago_core::{ActionKind, Engine, PetId, PetRecord, RuleSet, Species, Timestamp};

fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn species() -> impl Strategy<Value = Species> {
    prop::sample::select(Species::ALL.to_vec())
}

fn action() -> impl Strategy<Value = ActionKind> {
    prop::sample::select(ActionKind::ALL.to_vec())
}

fn pet() -> impl Strategy<Value = PetRecord> {
    (species(), 0u32..=100, 0u32..=100, 0u32..=100, 1u32..=20)
        .prop_flat_map(|(species, hunger, happiness, energy, level)| {
            (0..level * 100).prop_map(move |experience| PetRecord {
                hunger,
                happiness,
                energy,
                level,
                experience,
                ..PetRecord::new(PetId::new(1), "Prop", species, t0())
            })
        })
}

/// A step is either an action or a decay tick after some minutes
#[derive(Debug, Clone)]
enum Step {
    Act(ActionKind, i64),
    Decay(i64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (action(), 0i64..600).prop_map(|(kind, minutes)| Step::Act(kind, minutes)),
        (0i64..6_000).prop_map(Step::Decay),
    ]
}

fn assert_invariants(pet: &PetRecord) {
    assert!(pet.hunger <= 100);
    assert!(pet.happiness <= 100);
    assert!(pet.energy <= 100);
    assert!(pet.level >= 1);
    assert!(u64::from(pet.experience) < pet.level_threshold());
}

proptest! {
    #[test]
    fn property_stats_and_experience_stay_in_range(start in pet(), steps in prop::collection::vec(step(), 0..40)) {
        let engine = Engine::new(RuleSet::default());
        let mut current = start;
        let mut now = t0();

        for step in steps {
            let before = current.last_updated;
            current = match step {
                Step::Act(kind, minutes) => {
                    now += Duration::minutes(minutes);
                    engine.apply_action(Some(&current), kind, now).unwrap().pet
                }
                Step::Decay(minutes) => {
                    now += Duration::minutes(minutes);
                    engine.apply_elapsed_decay(&current, now).unwrap().pet
                }
            };
            assert_invariants(&current);
            prop_assert!(current.last_updated >= before);
        }
    }

    #[test]
    fn property_decay_never_increases_stats(start in pet(), minutes in -600i64..100_000) {
        let engine = Engine::new(RuleSet::default());
        let now = t0() + Duration::minutes(minutes);
        let outcome = engine.apply_elapsed_decay(&start, now).unwrap();

        prop_assert!(outcome.pet.hunger <= start.hunger);
        prop_assert!(outcome.pet.happiness <= start.happiness);
        prop_assert!(outcome.pet.energy <= start.energy);
        prop_assert!(outcome.pet.last_updated >= start.last_updated);
        prop_assert_eq!(outcome.pet.level, start.level);
        prop_assert_eq!(outcome.pet.experience, start.experience);
    }

    #[test]
    fn property_decay_debounces_within_six_minutes(start in pet(), first in 0i64..360, second in 0i64..360) {
        prop_assume!(first + second < 360);
        let engine = Engine::new(RuleSet::default());

        let once = engine
            .apply_elapsed_decay(&start, t0() + Duration::seconds(first))
            .unwrap();
        let twice = engine
            .apply_elapsed_decay(&once.pet, t0() + Duration::seconds(first + second))
            .unwrap();

        prop_assert!(!once.report.applied);
        prop_assert!(!twice.report.applied);
        prop_assert_eq!(&twice.pet, &start);
    }

    #[test]
    fn property_actions_are_deterministic(start in pet(), kind in action(), minutes in 0i64..10_000) {
        let engine = Engine::new(RuleSet::default());
        let now = t0() + Duration::minutes(minutes);

        let a = engine.apply_action(Some(&start), kind, now).unwrap();
        let b = engine.apply_action(Some(&start), kind, now).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn property_unknown_tokens_leave_pet_unchanged(start in pet(), token in "[a-z]{1,8}") {
        prop_assume!(token.parse::<ActionKind>().is_err());
        let engine = Engine::new(RuleSet::default());
        let snapshot = start.clone();

        let result = engine.perform(Some(&start), &token, t0());
        prop_assert!(result.is_err());
        prop_assert_eq!(start, snapshot);
    }
}
