pub mod battle;
pub mod chronicle;
pub mod config;
pub mod controller;
pub mod deity;
pub mod economy;
pub mod error;
pub mod events;
pub mod game;
pub mod heroes;
pub mod quests;
pub mod rng;
pub mod selector;
pub mod state;
pub mod turn;

pub use game::Game;

#[cfg(test)]
mod chronicle_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod economy_test;
#[cfg(test)]
mod events_test;
#[cfg(test)]
mod selector_test;
