//! The seam between the engine and whoever answers its questions.
//!
//! Whenever a human decision is needed (which hero, which skill, whether to
//! accept a merchant's deal) the engine asks a [`Controller`] synchronously
//! and carries on with the answer.

use std::collections::VecDeque;

use crate::rng::RandomSource;

pub trait Controller {
    /// Picks one of `options` by index, or `None` to cancel/decline.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl Controller for Decline {
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> Option<usize> {
        None
    }
}

/// Answers prompts from a queue, then declines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    answers: VecDeque<Option<usize>>,
    prompts: Vec<String>,
}

impl ScriptedController {
    pub fn new(answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt seen so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Controller for ScriptedController {
    fn choose(&mut self, prompt: &str, _options: &[String]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().flatten()
    }
}

/// What an effect gets to work with besides the kingdom itself.
pub struct EffectContext<'a> {
    pub rng: &'a mut dyn RandomSource,
    pub controller: &'a mut dyn Controller,
    pub messages: Vec<String>,
}

impl<'a> EffectContext<'a> {
    pub fn new(rng: &'a mut dyn RandomSource, controller: &'a mut dyn Controller) -> Self {
        Self {
            rng,
            controller,
            messages: Vec::new(),
        }
    }

    pub fn say(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn ask(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.controller
            .choose(prompt, options)
            .filter(|i| *i < options.len())
    }

    pub fn roll(&mut self, low: i64, high: i64) -> i64 {
        self.rng.int_range(low, high)
    }
}
