//! Observation builder.
use super::Action;
use crate::state::{GameState, PlayerData};

/// Builds the observation fed to a [`Policy`](super::Policy).
///
/// The builder is stateful by design: stacking builders keep a window of
/// past observations and reset it at episode boundaries.
pub trait ObsBuilder {
    /// The observation produced by this builder.
    type Obs;

    /// Called at episode boundaries, before the first build of an episode.
    fn reset(&mut self, initial_state: &GameState);

    /// Builds the observation of `player` from the decoded state and the
    /// action applied during the previous decision period.
    fn build_obs(
        &mut self,
        player: &PlayerData,
        state: &GameState,
        previous_action: &Action,
    ) -> Self::Obs;
}
