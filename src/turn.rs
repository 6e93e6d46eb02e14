//! One full day of the simulation.
//!
//! The order is fixed: production, upkeep, quest reset, blessing-adjusted
//! allowance, then at most one world event or (failing that) one citizen
//! request, and finally the calendar moves on.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::controller::EffectContext;
use crate::deity::Deity;
use crate::economy::{BuildingKind, Resource};
use crate::events::{EventDescriptor, citizen_requests, world_events};
use crate::selector::WeightedSelector;
use crate::state::Kingdom;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    /// The day that just ended.
    pub day: u32,
    pub farm_output: i64,
    pub arcane_output: i64,
    pub gold_output: i64,
    pub food_needed: i64,
    pub food_eaten: i64,
    pub shortage: bool,
    pub quests_per_day: u32,
    pub event: Option<String>,
    pub request: Option<String>,
    /// The deity milestone was reached with no patron chosen yet.
    pub deity_offered: bool,
    pub messages: Vec<String>,
}

impl DayReport {
    pub fn new_day(&self) -> u32 {
        self.day + 1
    }
}

#[derive(Debug)]
pub struct TurnEngine {
    events: Vec<EventDescriptor>,
    requests: Vec<EventDescriptor>,
    event_selector: WeightedSelector,
    request_selector: WeightedSelector,
}

impl TurnEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            events: world_events(),
            requests: citizen_requests(),
            event_selector: WeightedSelector::new(config.recent_events_max),
            request_selector: WeightedSelector::new(config.recent_events_max),
        }
    }

    pub fn events(&self) -> &[EventDescriptor] {
        &self.events
    }

    pub fn requests(&self) -> &[EventDescriptor] {
        &self.requests
    }

    pub fn recent_events(&self) -> impl Iterator<Item = &str> {
        self.event_selector.history()
    }

    pub fn advance_day(
        &mut self,
        state: &mut Kingdom,
        config: &GameConfig,
        ctx: &mut EffectContext<'_>,
    ) -> DayReport {
        let mut report = DayReport {
            day: state.day,
            ..DayReport::default()
        };
        ctx.say(format!("At the end of Day {}...", state.day));

        produce(state, &mut report);
        feed_heroes(state, ctx, &mut report);

        state.quests_today = 0;
        state.quests_per_day = daily_allowance(state);
        report.quests_per_day = state.quests_per_day;

        report.event = self.run_event_pass(state, config, ctx);
        if report.event.is_none() {
            report.request = self.run_request_pass(state, config, ctx);
        }

        state.day += 1;
        state.stats.turn_count += 1;
        ctx.say(format!("It is now Day {}.", state.day));
        if state.day == config.deity_milestone_day && state.deity.is_none() {
            report.deity_offered = true;
            ctx.say(format!(
                "A divine presence beckons! It's Day {}! Choose a patron deity.",
                state.day
            ));
        }

        info!(
            "day {} ended: food {} gold {} arcane {}",
            report.day,
            state.resources.get(Resource::Food),
            state.resources.get(Resource::Gold),
            state.resources.get(Resource::Arcane)
        );
        report.messages = std::mem::take(&mut ctx.messages);
        report
    }

    fn run_event_pass(
        &mut self,
        state: &mut Kingdom,
        config: &GameConfig,
        ctx: &mut EffectContext<'_>,
    ) -> Option<String> {
        let chance = config.event_chance_base
            + config.event_chance_per_town_center * i64::from(state.level(BuildingKind::TownCenter));
        let roll = ctx.rng.int_range(1, 100);
        if roll > chance {
            debug!("event roll {} > {}", roll, chance);
            ctx.say("Nothing eventful happened.");
            return None;
        }

        let event = self.event_selector.pick(&self.events, &*state, &mut *ctx.rng)?;
        (event.effect)(state, ctx);
        state.stats.random_events_held += 1;
        info!("event fired: {}", event.name);
        Some(event.name.to_string())
    }

    fn run_request_pass(
        &mut self,
        state: &mut Kingdom,
        config: &GameConfig,
        ctx: &mut EffectContext<'_>,
    ) -> Option<String> {
        let roll = ctx.rng.int_range(1, 100);
        if roll > config.request_chance {
            debug!("request roll {} > {}", roll, config.request_chance);
            return None;
        }

        let request = self
            .request_selector
            .pick(&self.requests, &*state, &mut *ctx.rng)?;
        (request.effect)(state, ctx);
        info!("citizen request: {}", request.name);
        Some(request.name.to_string())
    }
}

fn produce(state: &mut Kingdom, report: &mut DayReport) {
    let farm_level = state.level(BuildingKind::Farm);
    if farm_level > 0 {
        let mut output = BuildingKind::Farm.output_at(farm_level);
        if state.is_blessed_by(Deity::Harvest) {
            output = output * 3 / 2;
        }
        state.resources.add(Resource::Food, output);
        report.farm_output = output;
    }

    let arcane = BuildingKind::ArcaneTower.output_at(state.level(BuildingKind::ArcaneTower));
    state.resources.add(Resource::Arcane, arcane);
    state.stats.arcane_made += arcane;
    report.arcane_output = arcane;

    let gold = BuildingKind::TradingHall.output_at(state.level(BuildingKind::TradingHall));
    state.resources.add(Resource::Gold, gold);
    report.gold_output = gold;
}

/// Daily upkeep with a +/-5% jitter. Short stores are emptied and every
/// recruited hero loses 1 XP instead.
fn feed_heroes(state: &mut Kingdom, ctx: &mut EffectContext<'_>, report: &mut DayReport) {
    let mut base = state.base_food_need();
    if state.is_blessed_by(Deity::Feast) {
        base = base * 3 / 2;
    }
    let jitter = ctx.rng.float_range(-0.05, 0.05);
    let needed = base + (base as f64 * jitter) as i64;
    report.food_needed = needed;

    let available = state.resources.get(Resource::Food);
    if available < needed {
        state.resources.set_zero(Resource::Food);
        state.heroes.starve(1);
        report.shortage = true;
        ctx.say("You ran out of food to feed your Heroes! They lose some XP from hunger.");
        info!("food shortage: needed {} had {}", needed, available);
    } else {
        state.resources.take(Resource::Food, needed);
        state.stats.food_eaten += needed;
        report.food_eaten = needed;
        ctx.say(format!("Your Heroes ate {} food.", needed));
    }
    if report.farm_output > 0 {
        ctx.say(format!("Your Farms produced {} Food today.", report.farm_output));
    }
}

fn daily_allowance(state: &Kingdom) -> u32 {
    let bonus = if state.is_blessed_by(Deity::Feast) { 1 } else { 0 };
    state.base_quests_per_day + bonus
}
