//! Policy.
use super::Action;
use crate::state::GameState;

/// A policy mapping observations to action vectors.
///
/// The mapping can be either deterministic or stochastic.
pub trait Policy<O> {
    /// Computes an action given an observation.
    ///
    /// `state` is the decoded state the observation was built from, for
    /// policies that post-process their output with game context.
    fn act(&mut self, obs: &O, state: &GameState) -> Action;
}
