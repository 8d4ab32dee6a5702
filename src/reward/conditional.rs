//! Conditional reward combinator and its gating conditions.
#![allow(clippy::float_cmp)]
use super::predicates::{
    attacking, ball_approaching_goal, ball_at_goal, ball_crossed_halfway, defending,
    player_crossed_halfway,
};
use crate::base::{Action, RewardFunction};
use crate::state::{GameState, PlayerData};

/// A gate deciding whether a wrapped reward applies on this step.
pub trait Condition {
    /// Evaluates the gate for `player` on this step.
    fn condition(&mut self, player: &PlayerData, state: &GameState, previous_action: &Action)
        -> bool;
}

/// Applies an inner reward only while a [`Condition`] holds, 0 otherwise.
pub struct ConditionalReward<C, R> {
    condition: C,
    reward_fn: R,
}

impl<C, R> ConditionalReward<C, R>
where
    C: Condition,
    R: RewardFunction,
{
    /// Wraps `reward_fn` behind `condition`.
    pub fn new(condition: C, reward_fn: R) -> Self {
        Self {
            condition,
            reward_fn,
        }
    }
}

impl<C, R> RewardFunction for ConditionalReward<C, R>
where
    C: Condition,
    R: RewardFunction,
{
    fn reset(&mut self, initial_state: &GameState) {
        self.reward_fn.reset(initial_state);
    }

    fn get_reward(&mut self, player: &PlayerData, state: &GameState, previous_action: &Action) -> f32 {
        if self.condition.condition(player, state, previous_action) {
            self.reward_fn.get_reward(player, state, previous_action)
        } else {
            0.0
        }
    }
}

/// Holds while the player is attacking (see [`attacking`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct Attacking;

impl Condition for Attacking {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        attacking(player, state)
    }
}

/// Holds while the player is defending (see [`defending`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct Defending;

impl Condition for Defending {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        defending(player, state)
    }
}

/// Holds while the player is the last one back: every other non-demolished
/// teammate is attacking.
///
/// Fails outright when the player has pushed up (or the ball is loose in the
/// opponent half) while its own goal is not threatened.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastMan;

impl Condition for LastMan {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        if !ball_at_goal(player, state, false)
            && (player_crossed_halfway(player)
                || (ball_crossed_halfway(player, state)
                    && !ball_approaching_goal(state, player.team_num)))
        {
            return false;
        }
        let mut teammates = 0i32;
        let mut teammates_attacking = 0i32;
        for p in &state.players {
            if p.team_num == player.team_num && p.car_id != player.car_id && !p.is_demoed {
                teammates += 1;
                if attacking(p, state) {
                    teammates_attacking += 1;
                }
            }
        }
        teammates_attacking == teammates - 1
    }
}

/// Holds during the kickoff freeze: ball centered and the player stationary.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kickoff;

impl Condition for Kickoff {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        state.ball.position.x == 0.0
            && state.ball.position.y == 0.0
            && player.car_data.linear_velocity.norm() == 0.0
    }
}

/// Holds while no considered car is farther from the ball than the player.
pub struct FurthestFromBall {
    team_only: bool,
}

impl FurthestFromBall {
    /// Creates the gate; with `team_only` only teammates are considered.
    pub fn new(team_only: bool) -> Self {
        Self { team_only }
    }
}

impl Default for FurthestFromBall {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Condition for FurthestFromBall {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        let dist = (player.car_data.position - state.ball.position).norm();
        for p2 in &state.players {
            if !self.team_only || p2.team_num == player.team_num {
                let dist2 = (p2.car_data.position - state.ball.position).norm();
                if dist2 > dist {
                    return false;
                }
            }
        }
        true
    }
}

/// Holds while the player is neither the closest nor the farthest considered
/// car from the ball.
pub struct MidFromBall {
    team_only: bool,
}

impl MidFromBall {
    /// Creates the gate; with `team_only` only teammates are considered.
    pub fn new(team_only: bool) -> Self {
        Self { team_only }
    }
}

impl Default for MidFromBall {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Condition for MidFromBall {
    fn condition(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> bool {
        let dist = (player.car_data.position - state.ball.position).norm();
        let mut min = dist;
        let mut max = dist;
        for p2 in &state.players {
            if !self.team_only || p2.team_num == player.team_num {
                let dist2 = (p2.car_data.position - state.ball.position).norm();
                if dist2 > max {
                    max = dist2;
                }
                if dist2 < min {
                    min = dist2;
                }
            }
        }
        dist != max && dist != min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::zero_action;
    use crate::state::PhysicsObject;
    use nalgebra::Vector3;

    struct ConstantReward(f32);

    impl RewardFunction for ConstantReward {
        fn reset(&mut self, _initial_state: &GameState) {}
        fn get_reward(&mut self, _p: &PlayerData, _s: &GameState, _a: &Action) -> f32 {
            self.0
        }
    }

    fn player_at(car_id: usize, team_num: u8, pos: [f32; 3]) -> PlayerData {
        PlayerData {
            car_id,
            team_num,
            car_data: PhysicsObject {
                position: Vector3::from(pos),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_kickoff_gates_reward() {
        let mut rf = ConditionalReward::new(Kickoff, ConstantReward(1.0));
        let p = player_at(0, 0, [-2048.0, -2560.0, 17.0]);

        let mut state = GameState::default();
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 1.0);

        state.ball.position = Vector3::new(0.0, 500.0, 93.0);
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);
    }

    #[test]
    fn test_furthest_from_ball() {
        let me = player_at(0, 0, [2000.0, 0.0, 17.0]);
        let state = GameState {
            players: vec![
                me.clone(),
                player_at(1, 0, [100.0, 0.0, 17.0]),
                player_at(2, 1, [3000.0, 0.0, 17.0]),
            ],
            ..Default::default()
        };

        // Team-only ignores the distant opponent.
        assert!(FurthestFromBall::new(true).condition(&me, &state, &zero_action()));
        assert!(!FurthestFromBall::new(false).condition(&me, &state, &zero_action()));
    }

    #[test]
    fn test_mid_from_ball() {
        let me = player_at(0, 0, [500.0, 0.0, 17.0]);
        let state = GameState {
            players: vec![
                me.clone(),
                player_at(1, 0, [100.0, 0.0, 17.0]),
                player_at(2, 0, [2000.0, 0.0, 17.0]),
            ],
            ..Default::default()
        };
        assert!(MidFromBall::new(true).condition(&me, &state, &zero_action()));

        // The closest car is never mid.
        let closest = &state.players[1];
        assert!(!MidFromBall::new(true).condition(closest, &state, &zero_action()));
    }

    #[test]
    fn test_last_man() {
        // Self is back; one teammate attacks, the other idles in its own
        // half. All teammates but one attacking makes self the last man.
        let me = player_at(0, 0, [0.0, -3000.0, 17.0]);
        let mut striker = player_at(1, 0, [0.0, 500.0, 17.0]);
        striker.car_data.linear_velocity = Vector3::new(0.0, 800.0, 0.0);
        let idler = player_at(2, 0, [0.0, -500.0, 17.0]);

        let state = GameState {
            players: vec![me.clone(), striker, idler],
            ..Default::default()
        };
        assert!(LastMan.condition(&me, &state, &zero_action()));

        // Both teammates attacking: nobody is "all but one".
        let mut state = state;
        state.players[2].car_data.position = Vector3::new(0.0, 600.0, 17.0);
        state.players[2].car_data.linear_velocity = Vector3::new(0.0, 800.0, 0.0);
        assert!(!LastMan.condition(&me, &state, &zero_action()));

        // A pushed-up player with an unthreatened goal is never last man.
        let forward = player_at(0, 0, [0.0, 1000.0, 17.0]);
        assert!(!LastMan.condition(&forward, &state, &zero_action()));
    }
}
