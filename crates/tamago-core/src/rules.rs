//! Rule set injected into the engine

use crate::action::ActionRules;
use crate::decay::DecayRules;
use serde::{Deserialize, Serialize};

/// Action and decay tables together
///
/// `Default` yields the reference tables. Hosts that load rules from files
/// build one with [`RuleSet::new`] or start from [`RuleSet::empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub actions: ActionRules,
    pub decay: DecayRules,
}

impl RuleSet {
    pub fn new(actions: ActionRules, decay: DecayRules) -> Self {
        Self { actions, decay }
    }

    /// A rule set with no rows at all
    pub fn empty() -> Self {
        Self::new(ActionRules::new(), DecayRules::new())
    }
}
