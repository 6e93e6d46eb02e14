use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::economy::Cost;

/// Tunable numbers for one playthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub starting_resources: Cost,
    pub base_quests_per_day: u32,
    pub recent_events_max: usize,
    /// Event pass fires when a d100 roll is at or below
    /// `event_chance_base + event_chance_per_town_center * TownCenterLevel`.
    pub event_chance_base: i64,
    pub event_chance_per_town_center: i64,
    /// Request pass fires when a d100 roll is at or below this.
    pub request_chance: i64,
    pub deity_milestone_day: u32,
    pub hydra_hp: i64,
    pub hydra_damage: i64,
    pub max_success_chance: i64,
    pub recruit_cost: Cost,
    pub random_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            starting_resources: Cost::new(150, 50, 0),
            base_quests_per_day: 2,
            recent_events_max: 3,
            event_chance_base: 15,
            event_chance_per_town_center: 5,
            request_chance: 40,
            deity_milestone_day: 25,
            hydra_hp: 1000,
            hydra_damage: 75,
            max_success_chance: 95,
            recruit_cost: Cost::new(50, 10, 0),
            random_seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a config from `.yaml`/`.yml` or JSON, chosen by extension.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config: Self = if is_yaml {
            serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse YAML: {}", e))?
        } else {
            serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        let start = &self.starting_resources;
        if start.gold < 0 || start.food < 0 || start.arcane < 0 {
            return Err("Starting resources must not be negative".to_string());
        }
        if self.hydra_hp <= 0 {
            return Err(format!("Hydra HP must be positive, got {}", self.hydra_hp));
        }
        if self.hydra_damage <= 0 {
            return Err(format!(
                "Hydra damage must be positive, got {}",
                self.hydra_damage
            ));
        }
        if self.deity_milestone_day < 2 {
            return Err("Deity milestone must fall after day 1".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config: {}", self.name)?;
        writeln!(f, "  Starting resources: {}", self.starting_resources)?;
        writeln!(f, "  Quests per day: {}", self.base_quests_per_day)?;
        writeln!(
            f,
            "  Event chance: {} + {} per Town Center level",
            self.event_chance_base, self.event_chance_per_town_center
        )?;
        writeln!(f, "  Request chance: {}%", self.request_chance)?;
        writeln!(f, "  Deity offered on day {}", self.deity_milestone_day)?;
        writeln!(
            f,
            "  Hydra: {} HP, {} damage per round",
            self.hydra_hp, self.hydra_damage
        )?;
        match self.random_seed {
            Some(seed) => writeln!(f, "  Seed: {}", seed),
            None => writeln!(f, "  Seed: random"),
        }
    }
}
