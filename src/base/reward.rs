//! Reward function.
use super::Action;
use crate::state::{GameState, PlayerData};

/// A reward-shaping function used during offline training.
///
/// Implementations are either stateless or keep small private state (for
/// example the boost amount seen on the previous step), re-armed through
/// [`RewardFunction::reset`] at episode start.
pub trait RewardFunction {
    /// Called once per episode with the initial state.
    fn reset(&mut self, initial_state: &GameState);

    /// Scores one step of `player` given the decoded state and the action
    /// applied during the previous decision period.
    fn get_reward(
        &mut self,
        player: &PlayerData,
        state: &GameState,
        previous_action: &Action,
    ) -> f32;
}
