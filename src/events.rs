//! World events and citizen requests that may fire at the end of a day.
//!
//! Both are plain descriptor tables judged by the weighted selector. Citizen
//! requests never block on history, so their repeat window is zero.

use std::fmt;

use crate::controller::EffectContext;
use crate::economy::{BuildingKind, Resource};
use crate::heroes::HeroClass;
use crate::selector::Candidate;
use crate::state::Kingdom;

pub type Effect = fn(&mut Kingdom, &mut EffectContext<'_>);

pub struct EventDescriptor {
    pub name: &'static str,
    pub base_weight: i64,
    pub repeat_block: usize,
    pub condition: fn(&Kingdom) -> bool,
    pub weight_modifier: fn(&Kingdom) -> i64,
    pub effect: Effect,
}

impl Candidate<Kingdom> for EventDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn is_eligible(&self, state: &Kingdom) -> bool {
        (self.condition)(state)
    }

    fn weight(&self, state: &Kingdom) -> i64 {
        self.base_weight + (self.weight_modifier)(state)
    }

    fn repeat_block(&self) -> usize {
        self.repeat_block
    }
}

impl fmt::Debug for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("name", &self.name)
            .field("base_weight", &self.base_weight)
            .field("repeat_block", &self.repeat_block)
            .finish()
    }
}

pub fn world_events() -> Vec<EventDescriptor> {
    vec![
        EventDescriptor {
            name: "wandering_merchant",
            base_weight: 10,
            repeat_block: 1,
            condition: |_| true,
            weight_modifier: |_| 0,
            effect: wandering_merchant,
        },
        EventDescriptor {
            name: "wayward_adventurer",
            base_weight: 8,
            repeat_block: 2,
            condition: |_| true,
            weight_modifier: |_| 0,
            effect: wayward_adventurer,
        },
        EventDescriptor {
            name: "investor_visit",
            base_weight: 5,
            repeat_block: 2,
            condition: |s| s.level(BuildingKind::TradingHall) >= 2,
            weight_modifier: |_| 0,
            effect: investor_visit,
        },
        EventDescriptor {
            name: "farm_bumper_crop",
            base_weight: 7,
            repeat_block: 2,
            condition: |s| s.level(BuildingKind::Farm) > 0,
            weight_modifier: |s| i64::from(s.level(BuildingKind::Farm)) * 3,
            effect: farm_bumper_crop,
        },
        EventDescriptor {
            name: "arcane_experiment",
            base_weight: 6,
            repeat_block: 1,
            condition: |s| s.level(BuildingKind::ArcaneTower) > 0,
            weight_modifier: |s| i64::from(s.level(BuildingKind::ArcaneTower)) * 2,
            effect: arcane_experiment,
        },
        EventDescriptor {
            name: "local_festival",
            base_weight: 8,
            repeat_block: 1,
            condition: |_| true,
            weight_modifier: |s| i64::from(s.day / 5),
            effect: local_festival,
        },
        EventDescriptor {
            name: "royal_inspector",
            base_weight: 3,
            repeat_block: 2,
            condition: |_| true,
            weight_modifier: |_| 0,
            effect: royal_inspector,
        },
    ]
}

pub fn citizen_requests() -> Vec<EventDescriptor> {
    vec![
        EventDescriptor {
            name: "surplus_food",
            base_weight: 10,
            repeat_block: 0,
            condition: |s| surplus_food_offer(s).is_some(),
            weight_modifier: |_| 0,
            effect: request_surplus_food,
        },
        EventDescriptor {
            name: "arts_district",
            base_weight: 10,
            repeat_block: 0,
            condition: |s| s.level(BuildingKind::TownCenter) >= 2,
            weight_modifier: |_| 0,
            effect: request_arts_district,
        },
    ]
}

/// Food the farmers offer to sell, if stores exceed ten days of upkeep by
/// enough and a Trading Hall exists to sell it through.
pub fn surplus_food_offer(state: &Kingdom) -> Option<i64> {
    let daily_need = state.base_food_need();
    if daily_need <= 0 || state.level(BuildingKind::TradingHall) < 1 {
        return None;
    }
    let surplus = state.resources.get(Resource::Food) - daily_need * 10;
    let offer = surplus / 5;
    (offer >= 10).then_some(offer)
}

fn wandering_merchant(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Wandering Merchant arrives!");
    let options = [
        "Sell 10 Food for 30 Gold",
        "Sell 5 Food for 12 Gold",
        "Trade 5 Arcane for 40 Gold",
        "Decline the merchant's offer",
    ]
    .map(String::from);
    let prompt = format!(
        "A merchant offers trades. You have {} Food, {} Arcane, and {} Gold.",
        state.resources.get(Resource::Food),
        state.resources.get(Resource::Arcane),
        state.resources.get(Resource::Gold)
    );

    let (give, amount, gold) = match ctx.ask(&prompt, &options) {
        Some(0) => (Resource::Food, 10, 30),
        Some(1) => (Resource::Food, 5, 12),
        Some(2) => (Resource::Arcane, 5, 40),
        _ => {
            ctx.say("You declined the merchant's offer.");
            return;
        }
    };
    if state.resources.take(give, amount) {
        state.resources.add(Resource::Gold, gold);
        let verb = if give == Resource::Food { "sold" } else { "traded" };
        ctx.say(format!(
            "You {} {} {} for {} Gold.",
            verb,
            amount,
            give.name(),
            gold
        ));
    } else {
        ctx.say(format!("Not enough {}!", give.name()));
    }
}

fn wayward_adventurer(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Wayward Adventurer!");
    if state.heroes.get(HeroClass::Knight).level >= 2 {
        state.grant_xp(HeroClass::Knight, 2);
        ctx.say("Your Knight duels the adventurer and gains +2 XP!");
    } else {
        ctx.say("The adventurer finds no worthy opponent and leaves.");
    }
}

fn investor_visit(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Investor Visit!");
    state.resources.add(Resource::Gold, 100);
    ctx.say("An investor funds your treasury with 100 Gold!");
}

fn farm_bumper_crop(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Bumper Crop at the Farm!");
    let food = ctx.roll(10, 20) + i64::from(state.day) * 2;
    state.resources.add(Resource::Food, food);
    ctx.say(format!("Your farms produced an extra {} Food!", food));
}

fn arcane_experiment(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Arcane Experiment!");
    if ctx.roll(1, 100) <= 70 {
        let arcane = ctx.roll(5, 15) + i64::from(state.day);
        state.resources.add(Resource::Arcane, arcane);
        state.stats.arcane_made += arcane;
        ctx.say(format!(
            "Successful experiment! Gained {} Arcane Knowledge.",
            arcane
        ));
    } else if state.resources.take(Resource::Food, 5) {
        ctx.say("An experiment backfired, destroying 5 Food!");
    } else {
        ctx.say("A failed experiment scorched the nearly empty food stores.");
    }
}

fn local_festival(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Local Festival!");
    let gain = 5 + i64::from(state.day);
    state.resources.add(Resource::Gold, gain);
    state.resources.add(Resource::Food, gain);
    ctx.say(format!("The festival brings {} Gold and {} Food!", gain, gain));
}

fn royal_inspector(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Random Event: Royal Inspector Visits!");
    let target = BuildingKind::ALL[ctx.rng.choose_index(BuildingKind::ALL.len())];
    let day = i64::from(state.day);
    if state.level(target) < 2 {
        let fine = state.resources.drain(Resource::Gold, 10 + day);
        ctx.say(format!(
            "The inspector fined you {} Gold for an underwhelming {}!",
            fine, target
        ));
    } else {
        let gain = 20 + day;
        state.resources.add(Resource::Gold, gain);
        ctx.say(format!(
            "The inspector was impressed by your {}! You gained {} Gold.",
            target, gain
        ));
    }
}

fn request_surplus_food(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    let Some(offer) = surplus_food_offer(state) else {
        return;
    };
    ctx.say("Citizen Request: Farmers want to sell surplus Food at the Trading Hall.");
    let prompt = format!(
        "They propose selling {} surplus Food for {} Gold.",
        offer,
        offer * 10
    );
    let options = ["Approve the sale", "Deny the request"].map(String::from);
    if ctx.ask(&prompt, &options) == Some(0) && state.resources.take(Resource::Food, offer) {
        state.resources.add(Resource::Gold, offer * 10);
        ctx.say(format!(
            "You approved the sale. -{} Food, +{} Gold.",
            offer,
            offer * 10
        ));
    } else {
        ctx.say("You denied their request.");
    }
}

const ARTS_PURPOSES: [&str; 6] = [
    "fingerpainting supplies (paint)",
    "fingerpainting supplies (fingers)",
    "canvases",
    "marble",
    "instruments",
    "ink",
];
const ARTS_DONATION: i64 = 250;

fn request_arts_district(state: &mut Kingdom, ctx: &mut EffectContext<'_>) {
    ctx.say("Citizen Request: The Arts Guild requests Gold for a new studio.");
    let purpose = ARTS_PURPOSES[ctx.rng.choose_index(ARTS_PURPOSES.len())];
    let prompt = format!(
        "They are asking for {} Gold for {}.",
        ARTS_DONATION, purpose
    );
    let options = ["Fund the request", "Deny the request"].map(String::from);
    if ctx.ask(&prompt, &options) != Some(0) {
        ctx.say("You denied their request. Enjoy keeping your gold.");
        return;
    }
    if state.resources.take(Resource::Gold, ARTS_DONATION) {
        state.stats.gold_spent += ARTS_DONATION;
        ctx.say(format!("You approved the donation. -{} Gold.", ARTS_DONATION));
    } else {
        ctx.say(format!(
            "You don't actually have {} Gold. The studio stays empty.",
            ARTS_DONATION
        ));
    }
}
