//! Reward screen between rounds

use gridmon_battle::Move;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::progress::RewardOption;

/// Move offers shown next to the stat boost
pub const MOVE_OFFERS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct RewardState {
    /// Round just won
    pub round: u32,
    pub offers: Vec<RewardOption>,
    cursor: usize,
}

impl RewardState {
    pub fn new(round: u32, offers: Vec<RewardOption>) -> Self {
        Self {
            round,
            offers,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<&RewardOption> {
        self.offers.get(self.cursor)
    }

    /// Move the highlight left or right. Returns whether it moved.
    pub fn shift(&mut self, forward: bool) -> bool {
        let next = if forward {
            (self.cursor + 1).min(self.offers.len().saturating_sub(1))
        } else {
            self.cursor.saturating_sub(1)
        };
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }
}

/// A stat boost followed by distinct random moves from the pool
pub fn roll_offers<R: Rng + ?Sized>(rng: &mut R, pool: &[Move], stat_boost: u32) -> Vec<RewardOption> {
    let mut offers = vec![RewardOption::StatBoost { amount: stat_boost }];
    offers.extend(
        pool.choose_multiple(rng, MOVE_OFFERS)
            .cloned()
            .map(RewardOption::Move),
    );
    offers
}
