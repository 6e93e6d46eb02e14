//! The single owned aggregate holding everything a playthrough mutates.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::deity::{Deity, Pantheon};
use crate::economy::{BuildingKind, Buildings, ResourcePool};
use crate::heroes::{HeroClass, Roster};
use crate::quests::QuestKey;

/// Prerequisites for the final battle.
///
/// Flags only move from false to true, except that a lost battle sends the
/// party back to scouting. `fight_unlocked` always equals the conjunction of
/// the other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydraProgress {
    located: bool,
    access: bool,
    gear: bool,
    fight_unlocked: bool,
}

impl HydraProgress {
    pub fn located(&self) -> bool {
        self.located
    }

    pub fn access(&self) -> bool {
        self.access
    }

    pub fn gear(&self) -> bool {
        self.gear
    }

    pub fn fight_unlocked(&self) -> bool {
        self.fight_unlocked
    }

    pub fn mark_located(&mut self) {
        self.located = true;
    }

    pub fn mark_access(&mut self) {
        self.access = true;
    }

    pub fn mark_gear(&mut self) {
        self.gear = true;
    }

    /// Recomputes `fight_unlocked`. Returns true if this call unlocked it.
    pub fn refresh(&mut self) -> bool {
        let was = self.fight_unlocked;
        self.fight_unlocked = self.located && self.access && self.gear;
        !was && self.fight_unlocked
    }

    /// The hydra fled; its lair has to be found again.
    pub(crate) fn lose_track(&mut self) {
        self.located = false;
        self.refresh();
    }
}

/// Game-long counters, shown in the stats screen and on victory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub gold_spent: i64,
    pub food_eaten: i64,
    pub arcane_made: i64,
    pub quests_succeeded: u32,
    pub quests_failed: u32,
    pub xp_gained: u32,
    pub random_events_held: u32,
    pub hydras_slain: u32,
    pub turn_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastQuest {
    pub quest: QuestKey,
    pub hero: HeroClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kingdom {
    pub resources: ResourcePool,
    pub buildings: Buildings,
    pub heroes: Roster,
    pub hydra: HydraProgress,
    pub deity: Option<Deity>,
    pub pantheon: Pantheon,
    pub day: u32,
    pub quests_today: u32,
    pub quests_per_day: u32,
    pub base_quests_per_day: u32,
    pub last_quest: Option<LastQuest>,
    pub stats: GameStats,
}

impl Kingdom {
    pub fn new(config: &GameConfig) -> Self {
        let start = &config.starting_resources;
        Self {
            resources: ResourcePool::new(start.gold, start.food, start.arcane),
            buildings: Buildings::starting(),
            heroes: Roster::starting(),
            hydra: HydraProgress::default(),
            deity: None,
            pantheon: Pantheon::default(),
            day: 1,
            quests_today: 0,
            quests_per_day: config.base_quests_per_day,
            base_quests_per_day: config.base_quests_per_day,
            last_quest: None,
            stats: GameStats {
                turn_count: 1,
                ..GameStats::default()
            },
        }
    }

    pub fn level(&self, kind: BuildingKind) -> u32 {
        self.buildings.level(kind)
    }

    /// The patron whose blessing is in effect: chosen *and* a Temple stands.
    pub fn blessing(&self) -> Option<Deity> {
        if self.level(BuildingKind::Temple) >= 1 {
            self.deity
        } else {
            None
        }
    }

    pub fn is_blessed_by(&self, deity: Deity) -> bool {
        self.blessing() == Some(deity)
    }

    /// Unjittered daily food need: five per hero level.
    pub fn base_food_need(&self) -> i64 {
        self.heroes.total_levels() * 5
    }

    pub fn quests_remaining(&self) -> u32 {
        self.quests_per_day.saturating_sub(self.quests_today)
    }

    pub fn deity_name(&self, deity: Deity) -> String {
        self.pantheon.full_name(deity)
    }

    /// Credits XP to a hero and the game-long counter together.
    pub(crate) fn grant_xp(&mut self, hero: HeroClass, amount: u32) {
        self.heroes.get_mut(hero).gain_xp(amount);
        self.stats.xp_gained += amount;
    }
}

impl Default for Kingdom {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
