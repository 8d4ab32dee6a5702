//! Reward-shaping functions used during offline training.
//!
//! None of this runs at inference time; it is compiled into the training
//! harness that replays episodes and scores them. All functions implement
//! [`RewardFunction`] and keep any internal state private, re-armed through
//! `reset` at episode start.
mod common;
mod conditional;
mod predicates;

pub use crate::base::RewardFunction;
pub use common::{
    FlipReward, JumpTouchReward, LiuDistancePlayerToGoalReward, PickupBoostReward,
    TeamSpacingReward,
};
pub use conditional::{
    Attacking, Condition, ConditionalReward, Defending, FurthestFromBall, Kickoff, LastMan,
    MidFromBall,
};
pub use predicates::{
    attacking, ball_approaching_goal, ball_at_goal, ball_crossed_halfway, defending,
    player_approaching_goal, player_at_goal, player_crossed_halfway,
};
