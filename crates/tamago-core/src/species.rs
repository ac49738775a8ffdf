//! Pet species

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of pet species. The species selects the decay rule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
    Rabbit,
}

impl Species {
    /// All species in table order.
    pub const ALL: [Species; 3] = [Species::Cat, Species::Dog, Species::Rabbit];

    /// Lower-case token used on the wire and in rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Rabbit => "rabbit",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str() == s)
            .ok_or_else(|| Error::UnknownSpecies(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species() {
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("rabbit".parse::<Species>().unwrap(), Species::Rabbit);
        assert_eq!(
            "hamster".parse::<Species>(),
            Err(Error::UnknownSpecies("hamster".to_string()))
        );
    }

    #[test]
    fn test_species_ron() {
        let species: Species = ron::from_str("dog").unwrap();
        assert_eq!(species, Species::Dog);
    }
}
