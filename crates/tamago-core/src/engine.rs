//! The simulation engine
//!
//! Two entry points mutate a pet:
//! - [`Engine::apply_action`] - a user action with an immediate effect
//! - [`Engine::apply_elapsed_decay`] - passive, time-proportional decay
//!
//! Both take the current record by reference and return a new one; the
//! input is never modified, so a failed call leaves the caller's record as
//! it was. Neither reads the clock: `now` is always passed in.
//!
//! The two paths are independent. Actions never decay and decay never
//! grants experience. Callers that want both (e.g. when a session resumes)
//! decay first and then act.

use crate::action::ActionKind;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::pet::{PetRecord, StatChange};
use crate::rules::RuleSet;
use crate::time::{Elapsed, Timestamp};
use serde::{Deserialize, Serialize};

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The updated record
    pub pet: PetRecord,
    pub action: ActionKind,
    /// Experience gained by this action (base + mood bonus)
    pub exp_gain: u32,
    /// The action crossed the level threshold
    pub leveled_up: bool,
}

/// What a decay pass did
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayReport {
    /// Hours between `last_updated` and `now` (0.0 under clock skew)
    pub hours_elapsed: f64,
    /// Decay was computed and `last_updated` advanced
    pub applied: bool,
    /// `now` preceded `last_updated`; treated as no elapsed time
    pub clock_skew: bool,
    /// Points removed per stat before clamping
    pub decrease: StatChange,
}

/// Result of a decay pass
#[derive(Debug, Clone, PartialEq)]
pub struct DecayOutcome {
    /// The updated record (equal to the input when nothing was applied)
    pub pet: PetRecord,
    pub report: DecayReport,
}

/// Pure pet-state engine over an injected rule set
#[derive(Debug, Clone, Default)]
pub struct Engine {
    rules: RuleSet,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the default configuration
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with explicit configuration
    ///
    /// Fails with `InvalidConfig` when [`EngineConfig::validate`] does.
    pub fn with_config(rules: RuleSet, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { rules, config })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply an action given as a wire token (`"feed"`, `"play"`, ...).
    ///
    /// Fails with `InvalidState` when there is no pet and with
    /// `UnknownAction` when the token is not an action.
    pub fn perform(
        &self,
        pet: Option<&PetRecord>,
        token: &str,
        now: Timestamp,
    ) -> Result<ActionOutcome> {
        let pet = require(pet)?;
        let action = token.parse::<ActionKind>()?;
        self.act(pet, action, now)
    }

    /// Apply an action to a pet.
    ///
    /// 1. Add the rule's deltas, clamping each stat.
    /// 2. Gain `base_experience + happiness / 20`, using the happiness
    ///    *after* step 1.
    /// 3. If experience reached `level * 100`, level up once and reset
    ///    experience to zero. The remainder is not carried over and at most
    ///    one level is gained per action.
    /// 4. Advance `last_updated` to `now` (never backwards).
    ///
    /// No decay is applied here.
    pub fn apply_action(
        &self,
        pet: Option<&PetRecord>,
        action: ActionKind,
        now: Timestamp,
    ) -> Result<ActionOutcome> {
        let pet = require(pet)?;
        self.act(pet, action, now)
    }

    fn act(&self, pet: &PetRecord, action: ActionKind, now: Timestamp) -> Result<ActionOutcome> {
        let rule = self.rules.actions.lookup(action)?;

        let mut next = pet.clone();
        next.apply_change(rule.change(), self.config.stat_min, self.config.stat_max);

        let exp_gain = rule
            .base_experience
            .saturating_add(self.config.happiness_bonus(next.happiness));
        next.experience = next.experience.saturating_add(exp_gain);

        let leveled_up = u64::from(next.experience) >= next.level_threshold_with(&self.config);
        if leveled_up {
            next.level = next.level.saturating_add(1);
            next.experience = 0;
        }

        next.last_updated = next.last_updated.max(now);

        Ok(ActionOutcome {
            pet: next,
            action,
            exp_gain,
            leveled_up,
        })
    }

    /// Decay a pet's stats for the time since `last_updated`.
    ///
    /// Gaps under the debounce threshold (6 minutes by default) return the
    /// record untouched, `last_updated` included, so the short gap keeps
    /// accumulating. Otherwise each stat loses `floor(hours * rate)` points
    /// for the pet's species and `last_updated` becomes `now`.
    ///
    /// A `now` earlier than `last_updated` counts as zero elapsed time.
    pub fn apply_elapsed_decay(&self, pet: &PetRecord, now: Timestamp) -> Result<DecayOutcome> {
        let elapsed = Elapsed::between(pet.last_updated, now);

        if elapsed.hours < self.config.decay_threshold_hours {
            return Ok(DecayOutcome {
                pet: pet.clone(),
                report: DecayReport {
                    hours_elapsed: elapsed.hours,
                    applied: false,
                    clock_skew: elapsed.clock_skew,
                    decrease: StatChange::default(),
                },
            });
        }

        let rule = self.rules.decay.lookup(pet.species)?;
        let decrease = rule.decrease(elapsed.hours);

        let mut next = pet.clone();
        next.apply_change(decrease.negated(), self.config.stat_min, self.config.stat_max);
        next.last_updated = now;

        Ok(DecayOutcome {
            pet: next,
            report: DecayReport {
                hours_elapsed: elapsed.hours,
                applied: true,
                clock_skew: false,
                decrease,
            },
        })
    }
}

fn require(pet: Option<&PetRecord>) -> Result<&PetRecord> {
    pet.ok_or_else(|| Error::InvalidState("no pet record exists".to_string()))
}
