//! Hero levels, experience, skill ranks and derived combat power.

use std::fmt;

use serde::{Deserialize, Serialize};

/// XP needed to leave each level, indexed by `level - 1`.
pub const XP_TABLE: [u32; 5] = [10, 20, 40, 70, 110];
pub const MAX_LEVEL: u32 = XP_TABLE.len() as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Knight,
    Mage,
    Rogue,
}

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [HeroClass::Knight, HeroClass::Mage, HeroClass::Rogue];

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Knight => "Knight",
            HeroClass::Mage => "Mage",
            HeroClass::Rogue => "Rogue",
        }
    }

    pub fn skill_names(&self) -> [&'static str; 3] {
        match self {
            HeroClass::Knight => ["Iron Defense", "Swordsmanship", "Call to Arms"],
            HeroClass::Mage => ["Elemental Blast", "Mana Efficiency", "Arcane Overload"],
            HeroClass::Rogue => ["Backstab", "Pickpocket", "Shadow Cloak"],
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub class: HeroClass,
    /// 0 means not recruited.
    pub level: u32,
    pub xp: u32,
    /// Ranks in the order of [`HeroClass::skill_names`].
    pub skills: [u32; 3],
}

impl Hero {
    pub fn new(class: HeroClass) -> Self {
        Self {
            class,
            level: 0,
            xp: 0,
            skills: [0; 3],
        }
    }

    pub fn is_recruited(&self) -> bool {
        self.level > 0
    }

    pub fn combat_power(&self) -> i64 {
        let ranks: u32 = self.skills.iter().sum();
        i64::from(self.level) * 10 + i64::from(ranks) * 3
    }

    /// XP threshold for leaving the current level, if there is a next one.
    pub fn xp_to_next_level(&self) -> Option<u32> {
        if self.level == 0 || self.level >= MAX_LEVEL {
            return None;
        }
        XP_TABLE.get(self.level as usize - 1).copied()
    }

    pub fn can_level_up(&self) -> bool {
        self.xp_to_next_level().is_some_and(|needed| self.xp >= needed)
    }

    /// Spends the threshold XP, gains a level and one rank in `skill`.
    ///
    /// Returns `false` without changing anything if the hero cannot level or
    /// `skill` is out of range.
    pub(crate) fn level_up(&mut self, skill: usize) -> bool {
        let Some(needed) = self.xp_to_next_level() else {
            return false;
        };
        if self.xp < needed || skill >= self.skills.len() {
            return false;
        }
        self.xp -= needed;
        self.level += 1;
        self.skills[skill] += 1;
        true
    }

    pub fn skill_rank(&self, skill: usize) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    pub fn gain_xp(&mut self, amount: u32) {
        self.xp += amount;
    }

    pub fn lose_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_sub(amount);
    }
}

/// One hero slot per class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    heroes: [Hero; 3],
}

impl Roster {
    /// A level 1 Knight; Mage and Rogue await recruitment.
    pub fn starting() -> Self {
        let mut roster = Self {
            heroes: HeroClass::ALL.map(Hero::new),
        };
        roster.get_mut(HeroClass::Knight).level = 1;
        roster
    }

    pub fn get(&self, class: HeroClass) -> &Hero {
        &self.heroes[class as usize]
    }

    pub fn get_mut(&mut self, class: HeroClass) -> &mut Hero {
        &mut self.heroes[class as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    pub fn recruited(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(|h| h.is_recruited())
    }

    pub fn recruited_classes(&self) -> Vec<HeroClass> {
        self.recruited().map(|h| h.class).collect()
    }

    pub fn recruited_count(&self) -> usize {
        self.recruited().count()
    }

    pub fn total_levels(&self) -> i64 {
        self.heroes.iter().map(|h| i64::from(h.level)).sum()
    }

    pub fn total_combat_power(&self) -> i64 {
        self.recruited().map(Hero::combat_power).sum()
    }

    pub fn any_at_level(&self, level: u32) -> bool {
        self.heroes.iter().any(|h| h.level >= level)
    }

    /// Takes `amount` XP from every recruited hero, never below zero.
    pub fn starve(&mut self, amount: u32) {
        for hero in self.heroes.iter_mut().filter(|h| h.is_recruited()) {
            hero.lose_xp(amount);
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::starting()
    }
}
