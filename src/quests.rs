//! Quest descriptors and the success-roll model that resolves them.
//!
//! A quest succeeds when a d100 roll is at or below
//! `min(difficulty + hero combat power, cap)`. There is no lower bound on
//! the chance. Success runs the quest's own effect; failure always grants
//! the acting hero 1 XP and nothing else.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::controller::EffectContext;
use crate::deity::Deity;
use crate::economy::{BuildingKind, Resource};
use crate::heroes::HeroClass;
use crate::state::Kingdom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKey {
    GatherResources,
    ScoutHydraLocation,
    BuildHydraAccess,
    CraftHydraSlayingGear,
    PrayAtTemple,
    GodSpecialQuest,
}

impl QuestKey {
    pub const ALL: [QuestKey; 6] = [
        QuestKey::GatherResources,
        QuestKey::ScoutHydraLocation,
        QuestKey::BuildHydraAccess,
        QuestKey::CraftHydraSlayingGear,
        QuestKey::PrayAtTemple,
        QuestKey::GodSpecialQuest,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuestKey::GatherResources => "gather_resources",
            QuestKey::ScoutHydraLocation => "scout_hydra_location",
            QuestKey::BuildHydraAccess => "build_hydra_access",
            QuestKey::CraftHydraSlayingGear => "craft_hydra_slaying_gear",
            QuestKey::PrayAtTemple => "pray_at_temple",
            QuestKey::GodSpecialQuest => "god_special_quest",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuestKey::GatherResources => "Gather Resources",
            QuestKey::ScoutHydraLocation => "Scout Hydra Location",
            QuestKey::BuildHydraAccess => "Build Hydra Access Route",
            QuestKey::CraftHydraSlayingGear => "Craft Hydra-Slaying Gear",
            QuestKey::PrayAtTemple => "Pray at the Temple",
            QuestKey::GodSpecialQuest => "God's Special Quest",
        }
    }

    pub fn from_key(key: &str) -> Option<QuestKey> {
        Self::ALL.iter().copied().find(|q| q.key() == key)
    }
}

impl fmt::Display for QuestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

pub type QuestEffect = fn(&mut Kingdom, HeroClass, &mut EffectContext<'_>);

pub struct QuestDescriptor {
    pub key: QuestKey,
    pub difficulty: i64,
    pub condition: fn(&Kingdom) -> bool,
    pub on_success: QuestEffect,
}

impl QuestDescriptor {
    pub fn is_available(&self, state: &Kingdom) -> bool {
        (self.condition)(state)
    }
}

impl fmt::Debug for QuestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestDescriptor")
            .field("key", &self.key)
            .field("difficulty", &self.difficulty)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestResolution {
    pub quest: QuestKey,
    pub hero: HeroClass,
    pub chance: i64,
    pub roll: i64,
    pub outcome: QuestOutcome,
    /// Set when this resolution completed the battle prerequisites.
    pub fight_unlocked: bool,
    pub messages: Vec<String>,
}

pub fn success_chance(difficulty: i64, hero_power: i64, cap: i64) -> i64 {
    (difficulty + hero_power).min(cap)
}

/// Rolls for `quest` with `hero` and applies the outcome to `state`.
///
/// Eligibility and the daily allowance are the caller's concern.
pub fn resolve(
    quest: &QuestDescriptor,
    hero: HeroClass,
    state: &mut Kingdom,
    ctx: &mut EffectContext<'_>,
    cap: i64,
) -> QuestResolution {
    let power = state.heroes.get(hero).combat_power();
    let chance = success_chance(quest.difficulty, power, cap);
    let roll = ctx.rng.int_range(1, 100);

    let outcome = if roll <= chance {
        ctx.say(format!(
            "Success on '{}'! (roll {} <= {})",
            quest.key.title(),
            roll,
            chance
        ));
        (quest.on_success)(state, hero, ctx);
        state.stats.quests_succeeded += 1;
        QuestOutcome::Success
    } else {
        ctx.say(format!(
            "Failure on '{}' (roll {} > {}). +1 XP to {}.",
            quest.key.title(),
            roll,
            chance,
            hero
        ));
        state.grant_xp(hero, 1);
        state.stats.quests_failed += 1;
        QuestOutcome::Failure
    };
    info!(
        "quest {} by {}: roll {} vs {} -> {:?}",
        quest.key.key(),
        hero,
        roll,
        chance,
        outcome
    );

    let fight_unlocked = state.hydra.refresh();
    if fight_unlocked {
        ctx.say("All prerequisites met! Final battle unlocked.");
    }

    QuestResolution {
        quest: quest.key,
        hero,
        chance,
        roll,
        outcome,
        fight_unlocked,
        messages: std::mem::take(&mut ctx.messages),
    }
}

/// The six quests of the game, in menu order.
pub fn quest_book() -> Vec<QuestDescriptor> {
    vec![
        QuestDescriptor {
            key: QuestKey::GatherResources,
            difficulty: 50,
            condition: |_| true,
            on_success: gather_resources,
        },
        QuestDescriptor {
            key: QuestKey::ScoutHydraLocation,
            difficulty: 40,
            condition: |s| !s.hydra.located() && s.heroes.any_at_level(2),
            on_success: scout_hydra_location,
        },
        QuestDescriptor {
            key: QuestKey::BuildHydraAccess,
            difficulty: 30,
            condition: |s| s.hydra.located() && !s.hydra.access(),
            on_success: build_hydra_access,
        },
        QuestDescriptor {
            key: QuestKey::CraftHydraSlayingGear,
            difficulty: 20,
            condition: |s| !s.hydra.gear() && s.level(BuildingKind::Blacksmith) >= 2,
            on_success: craft_hydra_slaying_gear,
        },
        QuestDescriptor {
            key: QuestKey::PrayAtTemple,
            difficulty: 10,
            condition: |s| s.blessing().is_some(),
            on_success: pray_at_temple,
        },
        QuestDescriptor {
            key: QuestKey::GodSpecialQuest,
            difficulty: 40,
            condition: |s| s.blessing().is_some(),
            on_success: god_special_quest,
        },
    ]
}

fn feast_xp_bonus(state: &Kingdom) -> u32 {
    if state.is_blessed_by(Deity::Feast) { 1 } else { 0 }
}

fn gather_resources(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    let level = i64::from(state.heroes.get(hero).level);
    let gold = ctx.roll(level * 10, level * 10 + 20);
    let food = ctx.roll(level * 5, level * 10);
    let xp = 2 + feast_xp_bonus(state);

    state.resources.add(Resource::Gold, gold);
    state.resources.add(Resource::Food, food);
    state.grant_xp(hero, xp);
    ctx.say(format!(
        "Gained {} Gold, {} Food, and {} XP for {}.",
        gold, food, xp, hero
    ));
}

fn scout_hydra_location(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    state.hydra.mark_located();
    let xp = 5 + feast_xp_bonus(state);
    state.grant_xp(hero, xp);
    ctx.say(format!("Hydra's lair discovered! +{} XP", xp));
}

fn build_hydra_access(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    state.hydra.mark_access();
    let xp = 6 + feast_xp_bonus(state);
    state.grant_xp(hero, xp);
    ctx.say(format!("Route to Hydra established! +{} XP", xp));
}

fn craft_hydra_slaying_gear(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    state.hydra.mark_gear();
    let xp = 7 + feast_xp_bonus(state);
    state.grant_xp(hero, xp);
    ctx.say(format!("Dragonsteel gear forged! +{} XP", xp));
}

fn pray_at_temple(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    let mut xp = 2;
    match state.blessing() {
        Some(Deity::Feast) => xp += 2,
        Some(Deity::Harvest) => {
            let food = ctx.roll(5, 15);
            state.resources.add(Resource::Food, food);
            ctx.say(format!(
                "The {} blesses your supplies with +{} Food!",
                state.deity_name(Deity::Harvest),
                food
            ));
        }
        _ => {}
    }
    state.grant_xp(hero, xp);
    ctx.say(format!("You prayed at the Temple. +{} XP to {}.", xp, hero));
}

fn god_special_quest(state: &mut Kingdom, hero: HeroClass, ctx: &mut EffectContext<'_>) {
    let mut xp = 4;
    match state.blessing() {
        Some(Deity::Feast) => {
            let food = ctx.roll(10, 20);
            state.resources.add(Resource::Food, food);
            xp += 2;
            ctx.say(format!("You held a grand feast! +{} Food, +{} XP.", food, xp));
        }
        Some(Deity::Harvest) => {
            state.resources.add(Resource::Gold, 20);
            xp += 1;
            ctx.say("Your bountiful harvest was sold for +20 Gold!");
        }
        Some(Deity::Hunt) => {
            let food = ctx.roll(15, 25);
            state.resources.add(Resource::Food, food);
            xp += 2;
            ctx.say(format!("A successful hunt! +{} Food, +{} XP.", food, xp));
        }
        Some(Deity::Tides) => {
            let gold = ctx.roll(20, 40);
            let arcane = ctx.roll(1, 4);
            state.resources.add(Resource::Gold, gold);
            state.resources.add(Resource::Arcane, arcane);
            state.stats.arcane_made += arcane;
            ctx.say(format!(
                "A prosperous voyage! +{} Gold, +{} Arcane, +{} XP.",
                gold, arcane, xp
            ));
        }
        None => {}
    }
    state.grant_xp(hero, xp);
}
