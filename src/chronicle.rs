use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deity::Deity;
use crate::economy::{BuildingKind, Cost};
use crate::heroes::HeroClass;
use crate::quests::QuestKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChronicleEntry {
    pub timestamp: DateTime<Utc>,
    pub day: u32,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntryKind {
    BuildingUpgraded {
        building: BuildingKind,
        level: u32,
        cost: Cost,
    },
    HeroRecruited {
        hero: HeroClass,
    },
    HeroLeveled {
        hero: HeroClass,
        level: u32,
        skill: String,
    },
    QuestResolved {
        quest: QuestKey,
        hero: HeroClass,
        roll: i64,
        chance: i64,
        success: bool,
    },
    FoodConsumed {
        amount: i64,
    },
    FoodShortage {
        needed: i64,
        available: i64,
    },
    WorldEvent {
        name: String,
    },
    CitizenRequest {
        name: String,
    },
    DeityPledged {
        deity: Deity,
    },
    BattleFought {
        rounds: u32,
        victory: bool,
    },
}

impl fmt::Display for ChronicleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Day {}] ", self.day)?;

        match &self.kind {
            EntryKind::BuildingUpgraded {
                building,
                level,
                cost,
            } => write!(f, "{} upgraded to Lv {} for {}", building, level, cost),
            EntryKind::HeroRecruited { hero } => write!(f, "Recruited a {}", hero),
            EntryKind::HeroLeveled { hero, level, skill } => {
                write!(f, "{} reached Lv {} and trained {}", hero, level, skill)
            }
            EntryKind::QuestResolved {
                quest,
                hero,
                roll,
                chance,
                success,
            } => {
                let verdict = if *success { "succeeded" } else { "failed" };
                write!(
                    f,
                    "{} {} '{}' (roll {} vs {})",
                    hero,
                    verdict,
                    quest.title(),
                    roll,
                    chance
                )
            }
            EntryKind::FoodConsumed { amount } => write!(f, "Heroes ate {} Food", amount),
            EntryKind::FoodShortage { needed, available } => write!(
                f,
                "Food shortage: needed {}, had {}",
                needed, available
            ),
            EntryKind::WorldEvent { name } => write!(f, "Event: {}", name),
            EntryKind::CitizenRequest { name } => write!(f, "Citizen request: {}", name),
            EntryKind::DeityPledged { deity } => write!(f, "Pledged to the {}", deity),
            EntryKind::BattleFought { rounds, victory } => {
                let verdict = if *victory { "Victory" } else { "Defeat" };
                write!(f, "Hydra battle: {} after {} rounds", verdict, rounds)
            }
        }
    }
}

/// Everything notable that happened in a playthrough, in order.
#[derive(Debug, Default)]
pub struct Chronicle {
    entries: Vec<ChronicleEntry>,
}

impl Chronicle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, day: u32, kind: EntryKind) {
        self.entries.push(ChronicleEntry {
            timestamp: Utc::now(),
            day,
            kind,
        });
    }

    pub fn entries(&self) -> &[ChronicleEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let entries: Vec<ChronicleEntry> = serde_json::from_str(&json)?;
        Ok(Self { entries })
    }
}
