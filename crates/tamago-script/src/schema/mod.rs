//! Schema definitions for RON rule files

pub mod action;
pub mod decay;

pub use action::ActionDef;
pub use decay::DecayDef;

use serde::{Deserialize, Serialize};

/// Top-level layout of a rule file; either list may be left out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub actions: Vec<ActionDef>,
    #[serde(default)]
    pub decay: Vec<DecayDef>,
}
