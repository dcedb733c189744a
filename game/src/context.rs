//! State shared between scenes

use gridmon_roster::Species;

use crate::progress::GameProgress;

/// Everything that outlives a single scene, passed to scenes explicitly
#[derive(Debug, Clone, Default)]
pub struct GameContext {
    pub progress: GameProgress,
    selected: Option<Species>,
}

impl GameContext {
    pub fn new(starting_round: u32) -> Self {
        Self {
            progress: GameProgress::new(starting_round),
            selected: None,
        }
    }

    /// Lock in a fighter and start a fresh run
    pub fn select(&mut self, species: Species, starting_round: u32) {
        self.selected = Some(species);
        self.progress = GameProgress::new(starting_round);
    }

    pub fn selected(&self) -> Option<&Species> {
        self.selected.as_ref()
    }
}
