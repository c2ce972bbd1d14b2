//! Session state: score, health, boss gates and weapon progression.
//!
//! One `Session` resource replaces free-floating counters. Every rule that reads or
//! writes it takes it as a system parameter, so the scheduler serialises access.
//!
//! Clamping happens here, at the mutation site:
//! - score only grows (saturating)
//! - health stays in `0..=MAX_HEALTH`

use bevy::prelude::*;

use super::arsenal::Arsenal;

pub const MAX_HEALTH: i32 = 100;

/// One-shot boss encounters, in the priority order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encounter {
    Miniboss1,
    Miniboss2,
    Boss,
}

impl Encounter {
    pub const ALL: [Encounter; 3] = [Encounter::Miniboss1, Encounter::Miniboss2, Encounter::Boss];

    /// Score at which the encounter becomes due.
    pub fn threshold(self) -> u32 {
        match self {
            Encounter::Miniboss1 => 250,
            Encounter::Miniboss2 => 500,
            Encounter::Boss => 1000,
        }
    }
}

/// Gates flip false -> true once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BossGates {
    pub miniboss_1: bool,
    pub miniboss_2: bool,
    pub boss: bool,
}

impl BossGates {
    pub fn is_open(&self, encounter: Encounter) -> bool {
        match encounter {
            Encounter::Miniboss1 => self.miniboss_1,
            Encounter::Miniboss2 => self.miniboss_2,
            Encounter::Boss => self.boss,
        }
    }

    pub fn open(&mut self, encounter: Encounter) {
        match encounter {
            Encounter::Miniboss1 => self.miniboss_1 = true,
            Encounter::Miniboss2 => self.miniboss_2 = true,
            Encounter::Boss => self.boss = true,
        }
    }

    /// First encounter in priority order that is due and not yet spawned.
    ///
    /// Only one is returned per call, even when several thresholds are already
    /// crossed; the rest come due on later calls.
    pub fn due(&self, score: u32) -> Option<Encounter> {
        Encounter::ALL
            .into_iter()
            .find(|e| score >= e.threshold() && !self.is_open(*e))
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Session {
    score: u32,
    health: i32,
    over: bool,
    pub bosses: BossGates,
    pub arsenal: Arsenal,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            health: MAX_HEALTH,
            over: false,
            bosses: BossGates::default(),
            arsenal: Arsenal::default(),
        }
    }
}

impl Session {
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Apply damage and return `true` if this blow ended the session.
    pub fn damage(&mut self, amount: i32) -> bool {
        if self.over {
            return false;
        }
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            self.over = true;
        }
        self.over
    }

    /// No effect once the session is over.
    pub fn heal(&mut self, amount: i32) {
        if self.over {
            return;
        }
        self.health = (self.health + amount.max(0)).min(MAX_HEALTH);
    }

    /// Start over: zero score, full health, basic gun, closed gates.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
