//! Resource pools, buildings and their cost/production tables.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Gold,
    Food,
    Arcane,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Gold, Resource::Food, Resource::Arcane];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Gold => "Gold",
            Resource::Food => "Food",
            Resource::Arcane => "Arcane",
        }
    }
}

/// A price (or a snapshot of holdings) in all three resources at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub gold: i64,
    pub food: i64,
    pub arcane: i64,
}

impl Cost {
    pub const FREE: Cost = Cost::new(0, 0, 0);

    pub const fn new(gold: i64, food: i64, arcane: i64) -> Self {
        Self { gold, food, arcane }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G, {}F, {}A", self.gold, self.food, self.arcane)
    }
}

/// Non-negative amounts of every resource.
///
/// Amounts are kept private so nothing can push them below zero: removals
/// either check first ([`ResourcePool::try_spend`]) or clamp
/// ([`ResourcePool::drain`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    gold: i64,
    food: i64,
    arcane: i64,
}

impl ResourcePool {
    pub fn new(gold: i64, food: i64, arcane: i64) -> Self {
        Self {
            gold: gold.max(0),
            food: food.max(0),
            arcane: arcane.max(0),
        }
    }

    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Gold => self.gold,
            Resource::Food => self.food,
            Resource::Arcane => self.arcane,
        }
    }

    fn slot(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Gold => &mut self.gold,
            Resource::Food => &mut self.food,
            Resource::Arcane => &mut self.arcane,
        }
    }

    /// Adds a non-negative amount. Negative input is ignored.
    pub fn add(&mut self, resource: Resource, amount: i64) {
        if amount > 0 {
            *self.slot(resource) += amount;
        }
    }

    /// Removes up to `amount`, clamping at zero. Returns what was removed.
    pub fn drain(&mut self, resource: Resource, amount: i64) -> i64 {
        let slot = self.slot(resource);
        let taken = amount.clamp(0, *slot);
        *slot -= taken;
        taken
    }

    /// Removes exactly `amount` if available, otherwise leaves the pool alone.
    pub fn take(&mut self, resource: Resource, amount: i64) -> bool {
        if amount < 0 || self.get(resource) < amount {
            return false;
        }
        *self.slot(resource) -= amount;
        true
    }

    pub fn set_zero(&mut self, resource: Resource) {
        *self.slot(resource) = 0;
    }

    pub fn can_afford(&self, cost: &Cost) -> bool {
        self.gold >= cost.gold && self.food >= cost.food && self.arcane >= cost.arcane
    }

    /// Deducts all three parts of `cost` together, or nothing at all.
    pub fn try_spend(&mut self, cost: &Cost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.gold -= cost.gold;
        self.food -= cost.food;
        self.arcane -= cost.arcane;
        true
    }

    pub fn holdings(&self) -> Cost {
        Cost::new(self.gold, self.food, self.arcane)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    TownCenter,
    Farm,
    ArcaneTower,
    Barracks,
    TradingHall,
    Blacksmith,
    Temple,
}

const TOWN_CENTER_COSTS: [Cost; 3] = [
    Cost::new(0, 0, 0),
    Cost::new(100, 50, 10),
    Cost::new(300, 100, 25),
];
const FARM_COSTS: [Cost; 3] = [Cost::new(50, 0, 0), Cost::new(150, 0, 0), Cost::new(300, 0, 0)];
const ARCANE_TOWER_COSTS: [Cost; 3] = [
    Cost::new(75, 10, 0),
    Cost::new(200, 20, 0),
    Cost::new(400, 50, 0),
];
const BARRACKS_COSTS: [Cost; 3] = [
    Cost::new(100, 20, 0),
    Cost::new(250, 50, 0),
    Cost::new(500, 80, 0),
];
const TRADING_HALL_COSTS: [Cost; 3] = [
    Cost::new(100, 0, 0),
    Cost::new(300, 0, 0),
    Cost::new(600, 0, 0),
];
const BLACKSMITH_COSTS: [Cost; 3] = [
    Cost::new(80, 20, 0),
    Cost::new(200, 50, 10),
    Cost::new(500, 100, 25),
];
const TEMPLE_COSTS: [Cost; 1] = [Cost::new(200, 50, 10)];

const FARM_FOOD: [i64; 4] = [0, 3, 6, 10];
const TOWER_ARCANE: [i64; 4] = [0, 1, 3, 7];
const HALL_GOLD: [i64; 4] = [0, 5, 15, 50];

impl BuildingKind {
    pub const ALL: [BuildingKind; 7] = [
        BuildingKind::TownCenter,
        BuildingKind::Farm,
        BuildingKind::ArcaneTower,
        BuildingKind::Barracks,
        BuildingKind::TradingHall,
        BuildingKind::Blacksmith,
        BuildingKind::Temple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuildingKind::TownCenter => "Town Center",
            BuildingKind::Farm => "Farm",
            BuildingKind::ArcaneTower => "Arcane Tower",
            BuildingKind::Barracks => "Barracks",
            BuildingKind::TradingHall => "Trading Hall",
            BuildingKind::Blacksmith => "Blacksmith",
            BuildingKind::Temple => "Temple",
        }
    }

    /// Upgrade cost per current level; its length is the max level.
    pub fn upgrade_costs(&self) -> &'static [Cost] {
        match self {
            BuildingKind::TownCenter => &TOWN_CENTER_COSTS,
            BuildingKind::Farm => &FARM_COSTS,
            BuildingKind::ArcaneTower => &ARCANE_TOWER_COSTS,
            BuildingKind::Barracks => &BARRACKS_COSTS,
            BuildingKind::TradingHall => &TRADING_HALL_COSTS,
            BuildingKind::Blacksmith => &BLACKSMITH_COSTS,
            BuildingKind::Temple => &TEMPLE_COSTS,
        }
    }

    pub fn max_level(&self) -> u32 {
        self.upgrade_costs().len() as u32
    }

    /// Cost to go from `level` to `level + 1`, or `None` at max level.
    pub fn upgrade_cost(&self, level: u32) -> Option<Cost> {
        self.upgrade_costs().get(level as usize).copied()
    }

    /// Daily output of a production building, indexed by level.
    pub fn production(&self) -> Option<(Resource, &'static [i64])> {
        match self {
            BuildingKind::Farm => Some((Resource::Food, &FARM_FOOD)),
            BuildingKind::ArcaneTower => Some((Resource::Arcane, &TOWER_ARCANE)),
            BuildingKind::TradingHall => Some((Resource::Gold, &HALL_GOLD)),
            _ => None,
        }
    }

    pub fn output_at(&self, level: u32) -> i64 {
        self.production()
            .and_then(|(_, table)| table.get(level as usize).copied())
            .unwrap_or(0)
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current level of every building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buildings {
    levels: [u32; 7],
}

impl Buildings {
    /// Town Center at level 1, everything else unbuilt.
    pub fn starting() -> Self {
        let mut buildings = Self { levels: [0; 7] };
        buildings.levels[Self::index(BuildingKind::TownCenter)] = 1;
        buildings
    }

    fn index(kind: BuildingKind) -> usize {
        kind as usize
    }

    pub fn level(&self, kind: BuildingKind) -> u32 {
        self.levels[Self::index(kind)]
    }

    /// Overrides a level, capped at the building's max.
    pub fn set_level(&mut self, kind: BuildingKind, level: u32) {
        self.levels[Self::index(kind)] = level.min(kind.max_level());
    }

    pub fn next_upgrade_cost(&self, kind: BuildingKind) -> Option<Cost> {
        kind.upgrade_cost(self.level(kind))
    }

    /// Raises the level by one if below max. Returns the new level.
    pub(crate) fn raise(&mut self, kind: BuildingKind) -> Option<u32> {
        let level = self.level(kind);
        if level >= kind.max_level() {
            return None;
        }
        self.levels[Self::index(kind)] = level + 1;
        Some(level + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BuildingKind, u32)> + '_ {
        BuildingKind::ALL.iter().map(|k| (*k, self.level(*k)))
    }
}

impl Default for Buildings {
    fn default() -> Self {
        Self::starting()
    }
}
