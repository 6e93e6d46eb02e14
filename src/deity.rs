//! Patron deities and their randomly gendered titles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deity {
    Feast,
    Harvest,
    Hunt,
    Tides,
}

impl Deity {
    pub const ALL: [Deity; 4] = [Deity::Feast, Deity::Harvest, Deity::Hunt, Deity::Tides];

    pub fn from_index(index: usize) -> Option<Deity> {
        Self::ALL.get(index).copied()
    }

    pub fn domain(&self) -> &'static str {
        match self {
            Deity::Feast => "the Feast",
            Deity::Harvest => "the Harvest",
            Deity::Hunt => "the Hunt",
            Deity::Tides => "the Tides",
        }
    }

    pub fn bonus_info(&self) -> &'static str {
        match self {
            Deity::Feast => "+1 quest/day, faster hero XP",
            Deity::Harvest => "+50% Farm production",
            Deity::Hunt => "Special hunting quest for extra Food & XP",
            Deity::Tides => "Special seafaring quest (Gold/Arcane gain)",
        }
    }

    pub fn penalty_info(&self) -> &'static str {
        match self {
            Deity::Feast => "Heroes consume 50% more Food daily",
            Deity::Harvest => "No major downside",
            Deity::Hunt => "No major downside",
            Deity::Tides => "No direct penalty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    God,
    Goddess,
}

/// Titles of the four deities for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pantheon {
    titles: [Title; 4],
}

impl Pantheon {
    /// Flips a coin per deity to decide between "God" and "Goddess".
    pub fn rolled(rng: &mut dyn RandomSource) -> Self {
        let mut titles = [Title::God; 4];
        for title in titles.iter_mut() {
            if rng.coin_flip() {
                *title = Title::Goddess;
            }
        }
        Self { titles }
    }

    pub fn title(&self, deity: Deity) -> Title {
        self.titles[deity as usize]
    }

    /// e.g. "Goddess of the Harvest".
    pub fn full_name(&self, deity: Deity) -> String {
        let title = match self.title(deity) {
            Title::God => "God",
            Title::Goddess => "Goddess",
        };
        format!("{} of {}", title, deity.domain())
    }
}

impl Default for Pantheon {
    fn default() -> Self {
        Self {
            titles: [Title::God; 4],
        }
    }
}

impl fmt::Display for Deity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deity of {}", self.domain())
    }
}
