//! RON rule loader

use crate::error::{Error, Result};
use crate::schema::RuleFile;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tamago_core::{ActionKind, RuleSet, Species};
use tracing::debug;

/// Loader for RON rule files
///
/// Rows from several files merge into one [`RuleSet`]. Defining the same
/// action or species twice across the loaded files is an error; replacing a
/// row that came from [`Loader::with_defaults`] is not.
pub struct Loader {
    rules: RuleSet,
    actions_seen: HashSet<ActionKind>,
    species_seen: HashSet<Species>,
}

impl Loader {
    /// Create a loader that starts with empty tables
    pub fn new() -> Self {
        Self::starting_from(RuleSet::empty())
    }

    /// Create a loader that starts with the reference tables
    pub fn with_defaults() -> Self {
        Self::starting_from(RuleSet::default())
    }

    fn starting_from(rules: RuleSet) -> Self {
        Self {
            rules,
            actions_seen: HashSet::new(),
            species_seen: HashSet::new(),
        }
    }

    /// Load rules from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: RuleFile = ron::from_str(content)?;
        self.merge(file)
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        self.load_str(&content)?;
        debug!(path = %path.display(), "Loaded rule file");
        Ok(())
    }

    /// Load all RON files from a directory, recursing into subdirectories
    ///
    /// Files are visited in name order so duplicate errors are stable.
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    fn merge(&mut self, file: RuleFile) -> Result<()> {
        // Validate the whole file before touching the tables
        let mut actions = Vec::with_capacity(file.actions.len());
        for def in &file.actions {
            if self.actions_seen.contains(&def.kind)
                || actions.iter().any(|(kind, _)| *kind == def.kind)
            {
                return Err(Error::DuplicateDefinition(format!("action {}", def.kind)));
            }
            actions.push((def.kind, def.to_rule()?));
        }

        let mut decay = Vec::with_capacity(file.decay.len());
        for def in &file.decay {
            if self.species_seen.contains(&def.species)
                || decay.iter().any(|(species, _)| *species == def.species)
            {
                return Err(Error::DuplicateDefinition(format!(
                    "decay {}",
                    def.species
                )));
            }
            decay.push((def.species, def.to_rule()?));
        }

        for (kind, rule) in actions {
            self.actions_seen.insert(kind);
            self.rules.actions.insert(kind, rule);
        }
        for (species, rule) in decay {
            self.species_seen.insert(species);
            self.rules.decay.insert(species, rule);
        }
        Ok(())
    }

    /// Finish loading and return the rule set
    pub fn finish(self) -> RuleSet {
        self.rules
    }

    /// Get the current rules (for inspection during loading)
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
