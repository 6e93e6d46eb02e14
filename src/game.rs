//! The player-facing operations, and the one object that owns all state.
//!
//! Every command either succeeds and mutates the kingdom, or returns a
//! [`GameError`] and leaves it exactly as it was.

use log::info;

use crate::battle::{self, BattleReport};
use crate::chronicle::{Chronicle, EntryKind};
use crate::config::GameConfig;
use crate::controller::{Controller, EffectContext};
use crate::deity::{Deity, Pantheon};
use crate::economy::{BuildingKind, Cost};
use crate::error::{GameError, GameResult};
use crate::heroes::HeroClass;
use crate::quests::{self, QuestDescriptor, QuestKey, QuestResolution, quest_book};
use crate::rng::{GameRng, RandomSource};
use crate::state::{Kingdom, LastQuest};
use crate::turn::{DayReport, TurnEngine};

#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeReport {
    pub building: BuildingKind,
    pub level: u32,
    pub cost: Cost,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroReport {
    pub hero: HeroClass,
    pub level: u32,
    /// The skill that gained a rank; `None` for a fresh recruit.
    pub skill: Option<String>,
    pub messages: Vec<String>,
}

#[derive(Debug)]
pub struct Game<R: RandomSource = GameRng> {
    state: Kingdom,
    config: GameConfig,
    rng: R,
    quests: Vec<QuestDescriptor>,
    turns: TurnEngine,
    chronicle: Chronicle,
}

impl Game<GameRng> {
    /// Seeds from `config.random_seed` when present, otherwise from the OS.
    pub fn from_config(config: GameConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_os(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let mut state = Kingdom::new(&config);
        state.pantheon = Pantheon::rolled(&mut rng);
        let turns = TurnEngine::new(&config);
        Self {
            state,
            config,
            rng,
            quests: quest_book(),
            turns,
            chronicle: Chronicle::new(),
        }
    }

    pub fn state(&self) -> &Kingdom {
        &self.state
    }

    /// Direct access for scenario setup and tests.
    pub fn state_mut(&mut self) -> &mut Kingdom {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn chronicle(&self) -> &Chronicle {
        &self.chronicle
    }

    pub fn turns(&self) -> &TurnEngine {
        &self.turns
    }

    pub fn upgrade_building(&mut self, kind: BuildingKind) -> GameResult<UpgradeReport> {
        let Some(cost) = self.state.buildings.next_upgrade_cost(kind) else {
            return Err(GameError::PreconditionUnmet(format!(
                "{} is already at max level.",
                kind
            )));
        };
        if !self.state.resources.try_spend(&cost) {
            return Err(GameError::InsufficientResources {
                required: cost,
                available: self.state.resources.holdings(),
            });
        }
        let level = self.state.buildings.raise(kind).unwrap_or(kind.max_level());
        self.state.stats.gold_spent += cost.gold;

        info!("upgraded {} to level {} for {}", kind, level, cost);
        self.chronicle.log(
            self.state.day,
            EntryKind::BuildingUpgraded {
                building: kind,
                level,
                cost,
            },
        );
        Ok(UpgradeReport {
            building: kind,
            level,
            cost,
            messages: vec![format!("{} upgraded to Level {}!", kind, level)],
        })
    }

    /// Recruits the class at level 0, otherwise trains it one level.
    ///
    /// Training asks `controller` which skill to rank up; the level and the
    /// skill rank are applied together or not at all.
    pub fn recruit_or_train_hero(
        &mut self,
        class: HeroClass,
        controller: &mut dyn Controller,
    ) -> GameResult<HeroReport> {
        if self.state.heroes.get(class).is_recruited() {
            self.train_hero(class, controller)
        } else {
            self.recruit_hero(class)
        }
    }

    fn recruit_hero(&mut self, class: HeroClass) -> GameResult<HeroReport> {
        let prerequisite = match class {
            HeroClass::Knight | HeroClass::Rogue => BuildingKind::Barracks,
            HeroClass::Mage => BuildingKind::ArcaneTower,
        };
        if self.state.level(prerequisite) < 1 {
            return Err(GameError::PreconditionUnmet(format!(
                "Requires at least 1 {} to recruit a {}.",
                prerequisite, class
            )));
        }
        let slots = self.state.level(BuildingKind::TownCenter) as usize;
        if self.state.heroes.recruited_count() >= slots {
            return Err(GameError::PreconditionUnmet(
                "Cannot recruit more heroes. Upgrade Town Center for more slots.".to_string(),
            ));
        }
        let cost = self.config.recruit_cost;
        if !self.state.resources.try_spend(&cost) {
            return Err(GameError::InsufficientResources {
                required: cost,
                available: self.state.resources.holdings(),
            });
        }
        self.state.stats.gold_spent += cost.gold;
        self.state.heroes.get_mut(class).level = 1;

        info!("recruited {}", class);
        self.chronicle
            .log(self.state.day, EntryKind::HeroRecruited { hero: class });
        Ok(HeroReport {
            hero: class,
            level: 1,
            skill: None,
            messages: vec![format!("Recruited a Level 1 {}!", class)],
        })
    }

    fn train_hero(
        &mut self,
        class: HeroClass,
        controller: &mut dyn Controller,
    ) -> GameResult<HeroReport> {
        let hero = self.state.heroes.get(class);
        let Some(needed) = hero.xp_to_next_level() else {
            return Err(GameError::PreconditionUnmet(format!(
                "{} is already max level.",
                class
            )));
        };
        if hero.xp < needed {
            return Err(GameError::PreconditionUnmet(format!(
                "Not enough XP to upgrade {}. Need {} more XP.",
                class,
                needed - hero.xp
            )));
        }

        let names = class.skill_names();
        let options: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{} (Rank {})", name, hero.skill_rank(i)))
            .collect();
        let prompt = format!("Choose a skill to improve for {}", class);
        let skill = controller
            .choose(&prompt, &options)
            .filter(|i| *i < names.len())
            .ok_or_else(|| GameError::InvalidSelection("No skill chosen.".to_string()))?;

        let hero = self.state.heroes.get_mut(class);
        if !hero.level_up(skill) {
            return Err(GameError::PreconditionUnmet(format!(
                "{} cannot advance right now.",
                class
            )));
        }
        let level = hero.level;
        let rank = hero.skill_rank(skill);
        let skill_name = names[skill].to_string();

        info!("{} trained to level {} ({})", class, level, skill_name);
        self.chronicle.log(
            self.state.day,
            EntryKind::HeroLeveled {
                hero: class,
                level,
                skill: skill_name.clone(),
            },
        );
        Ok(HeroReport {
            hero: class,
            level,
            skill: Some(skill_name.clone()),
            messages: vec![
                format!("{} advanced to Level {}!", class, level),
                format!("{}'s {} is now Rank {}!", class, skill_name, rank),
            ],
        })
    }

    pub fn quest(&self, key: QuestKey) -> Option<&QuestDescriptor> {
        self.quests.iter().find(|q| q.key == key)
    }

    /// Quests whose conditions hold right now, in menu order.
    pub fn list_available_quests(&self) -> Vec<QuestKey> {
        self.quests
            .iter()
            .filter(|q| q.is_available(&self.state))
            .map(|q| q.key)
            .collect()
    }

    /// Sends a hero on a quest.
    ///
    /// With `hero` omitted, a lone recruited hero goes; with several, the
    /// controller picks.
    pub fn send_on_quest(
        &mut self,
        key: QuestKey,
        hero: Option<HeroClass>,
        controller: &mut dyn Controller,
    ) -> GameResult<QuestResolution> {
        if self.state.quests_today >= self.state.quests_per_day {
            return Err(GameError::ExhaustedDailyActions {
                used: self.state.quests_today,
                allowed: self.state.quests_per_day,
            });
        }
        let Some(quest) = self.quests.iter().find(|q| q.key == key) else {
            return Err(GameError::InvalidSelection(format!(
                "Unknown quest {}.",
                key.key()
            )));
        };
        if !quest.is_available(&self.state) {
            return Err(GameError::PreconditionUnmet(
                "This quest is unavailable right now.".to_string(),
            ));
        }

        let active = self.state.heroes.recruited_classes();
        if active.is_empty() {
            return Err(GameError::PreconditionUnmet(
                "No heroes available. Recruit someone first.".to_string(),
            ));
        }
        let hero = match hero {
            Some(class) if active.contains(&class) => class,
            Some(class) => {
                return Err(GameError::InvalidSelection(format!(
                    "{} has not been recruited.",
                    class
                )));
            }
            None if active.len() == 1 => active[0],
            None => {
                let options: Vec<String> = active
                    .iter()
                    .map(|c| {
                        let h = self.state.heroes.get(*c);
                        format!("{} (Lv {}, XP {})", c, h.level, h.xp)
                    })
                    .collect();
                let prompt = format!("Which hero to send on '{}'?", key.title());
                controller
                    .choose(&prompt, &options)
                    .and_then(|i| active.get(i).copied())
                    .ok_or_else(|| GameError::InvalidSelection("No hero chosen.".to_string()))?
            }
        };

        let mut ctx = EffectContext::new(&mut self.rng, controller);
        let resolution = quests::resolve(
            quest,
            hero,
            &mut self.state,
            &mut ctx,
            self.config.max_success_chance,
        );
        self.state.quests_today += 1;
        self.state.last_quest = Some(LastQuest { quest: key, hero });

        self.chronicle.log(
            self.state.day,
            EntryKind::QuestResolved {
                quest: key,
                hero,
                roll: resolution.roll,
                chance: resolution.chance,
                success: resolution.outcome == quests::QuestOutcome::Success,
            },
        );
        Ok(resolution)
    }

    /// Re-runs the last quest with the same hero.
    pub fn repeat_last_quest(
        &mut self,
        controller: &mut dyn Controller,
    ) -> GameResult<QuestResolution> {
        let Some(last) = self.state.last_quest else {
            return Err(GameError::PreconditionUnmet(
                "No quest to repeat.".to_string(),
            ));
        };
        self.send_on_quest(last.quest, Some(last.hero), controller)
    }

    pub fn advance_day(&mut self, controller: &mut dyn Controller) -> DayReport {
        let mut ctx = EffectContext::new(&mut self.rng, controller);
        let report = self
            .turns
            .advance_day(&mut self.state, &self.config, &mut ctx);

        let day = report.day;
        if report.shortage {
            self.chronicle.log(
                day,
                EntryKind::FoodShortage {
                    needed: report.food_needed,
                    available: 0,
                },
            );
        } else {
            self.chronicle.log(
                day,
                EntryKind::FoodConsumed {
                    amount: report.food_eaten,
                },
            );
        }
        if let Some(name) = &report.event {
            self.chronicle
                .log(day, EntryKind::WorldEvent { name: name.clone() });
        }
        if let Some(name) = &report.request {
            self.chronicle
                .log(day, EntryKind::CitizenRequest { name: name.clone() });
        }
        report
    }

    pub fn attempt_final_battle(&mut self) -> GameResult<BattleReport> {
        let report = battle::attempt(&mut self.state, &self.config, &mut self.rng)?;
        self.chronicle.log(
            self.state.day,
            EntryKind::BattleFought {
                rounds: report.rounds.len() as u32,
                victory: report.outcome == battle::BattleOutcome::Victory,
            },
        );
        Ok(report)
    }

    /// True once the milestone day has passed without a patron.
    pub fn can_choose_deity(&self) -> bool {
        self.state.deity.is_none() && self.state.day >= self.config.deity_milestone_day
    }

    /// One line per deity: full title, bonus and penalty.
    pub fn deity_options(&self) -> Vec<String> {
        Deity::ALL
            .iter()
            .map(|d| {
                format!(
                    "{} | Bonus: {} | Penalty: {}",
                    self.state.deity_name(*d),
                    d.bonus_info(),
                    d.penalty_info()
                )
            })
            .collect()
    }

    /// Pledges to the deity at `index`. A second pledge is a no-op.
    pub fn choose_deity(&mut self, index: usize) -> GameResult<Vec<String>> {
        if self.state.deity.is_some() {
            return Ok(vec!["You already follow a deity.".to_string()]);
        }
        let deity = Deity::from_index(index).ok_or_else(|| {
            GameError::InvalidSelection(format!("There is no deity number {}.", index + 1))
        })?;
        self.state.deity = Some(deity);

        let mut messages = vec![format!(
            "You have pledged to the {}.",
            self.state.deity_name(deity)
        )];
        if self.state.level(BuildingKind::Temple) < 1 {
            messages.push("Build a Temple (Temple Lv 1) to unlock their blessing!".to_string());
        }
        info!("pledged to {:?}", deity);
        self.chronicle
            .log(self.state.day, EntryKind::DeityPledged { deity });
        Ok(messages)
    }
}
