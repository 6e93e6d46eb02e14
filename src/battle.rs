//! The final fight: simultaneous damage each round until one side drops.
//!
//! Damage bands are 80%..120% of the attacker's strength, floored. There is
//! no round cap. Because the hydra's damage is positive, the party's pool
//! always runs out eventually, so the loop ends for any valid config.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::rng::RandomSource;
use crate::state::Kingdom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRound {
    pub round: u32,
    pub damage_to_hydra: i64,
    pub damage_to_party: i64,
    pub hydra_hp: i64,
    pub party_hp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub party_power: i64,
    pub rounds: Vec<BattleRound>,
    pub outcome: BattleOutcome,
    pub messages: Vec<String>,
}

fn damage_band(strength: i64, rng: &mut dyn RandomSource) -> i64 {
    let s = strength as f64;
    rng.float_range(s * 0.8, s * 1.2).floor() as i64
}

/// Runs rounds until the hydra or the party is out of HP.
///
/// Both damages of a round are drawn (hydra's first) and applied before
/// either pool is checked; a double knockout counts as a victory.
pub fn simulate(
    party_power: i64,
    hydra_hp: i64,
    hydra_damage: i64,
    rng: &mut dyn RandomSource,
) -> (Vec<BattleRound>, BattleOutcome) {
    let mut hydra = hydra_hp;
    let mut party = party_power * 2;
    let mut rounds = Vec::new();

    loop {
        let damage_to_hydra = damage_band(party_power, rng);
        let damage_to_party = damage_band(hydra_damage, rng);
        hydra -= damage_to_hydra;
        party -= damage_to_party;

        let round = BattleRound {
            round: rounds.len() as u32 + 1,
            damage_to_hydra,
            damage_to_party,
            hydra_hp: hydra,
            party_hp: party,
        };
        debug!("battle {:?}", round);
        rounds.push(round);

        if hydra <= 0 {
            return (rounds, BattleOutcome::Victory);
        }
        if party <= 0 {
            return (rounds, BattleOutcome::Defeat);
        }
    }
}

/// Fights the hydra with every recruited hero.
///
/// Refused without touching state unless the battle is unlocked and the
/// party has some combat power. A defeat sends the party back to scouting.
pub fn attempt(
    state: &mut Kingdom,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> GameResult<BattleReport> {
    if !state.hydra.fight_unlocked() {
        return Err(GameError::PreconditionUnmet(
            "You haven't completed all Hydra prerequisites!".to_string(),
        ));
    }
    let power = state.heroes.total_combat_power();
    if power <= 0 {
        return Err(GameError::PreconditionUnmet(
            "No heroes available to fight!".to_string(),
        ));
    }

    let mut messages = vec![format!(
        "Your team's total combat power is {}. Hydra HP: {}.",
        power, config.hydra_hp
    )];
    let (rounds, outcome) = simulate(power, config.hydra_hp, config.hydra_damage, rng);
    for r in &rounds {
        messages.push(format!(
            "Round {}: You deal {}, Hydra deals {}",
            r.round, r.damage_to_hydra, r.damage_to_party
        ));
    }

    match outcome {
        BattleOutcome::Victory => {
            state.stats.hydras_slain += 1;
            messages.push("Hydra is slain! Victory!".to_string());
            messages.push("Congratulations! The Hydra is slain, your kingdom is saved!".to_string());
        }
        BattleOutcome::Defeat => {
            state.hydra.lose_track();
            messages.push(
                "Your heroes have been defeated and the Hydra flees. Rebuild and try again."
                    .to_string(),
            );
        }
    }
    info!(
        "hydra battle with power {}: {:?} after {} rounds",
        power,
        outcome,
        rounds.len()
    );

    Ok(BattleReport {
        party_power: power,
        rounds,
        outcome,
        messages,
    })
}
