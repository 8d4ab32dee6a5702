//! Shaping rewards over a single player's state.
use crate::base::{Action, RewardFunction};
use crate::common_values::{BLUE_GOAL_CENTER, BLUE_TEAM, CAR_MAX_SPEED, ORANGE_GOAL_CENTER, ORANGE_TEAM};
use crate::state::{GameState, PlayerData};
use nalgebra::Vector3;

/// Penalizes teammates bunching up closer than `min_spacing`.
///
/// The penalty grows linearly from 0 at `min_spacing` to -1 per teammate at
/// zero separation. Demolished cars on either end are ignored.
pub struct TeamSpacingReward {
    min_spacing: f32,
}

impl TeamSpacingReward {
    /// Creates the reward with the given minimum spacing.
    pub fn new(min_spacing: f32) -> Self {
        Self { min_spacing }
    }
}

impl Default for TeamSpacingReward {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

impl RewardFunction for TeamSpacingReward {
    fn reset(&mut self, _initial_state: &GameState) {}

    fn get_reward(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> f32 {
        let mut reward = 0.0;
        for p in &state.players {
            if p.team_num == player.team_num
                && p.car_id != player.car_id
                && !player.is_demoed
                && !p.is_demoed
            {
                let separation = (player.car_data.position - p.car_data.position).norm();
                if separation < self.min_spacing {
                    reward -= 1.0 - separation / self.min_spacing;
                }
            }
        }
        reward
    }
}

/// Rewards spending the flip.
///
/// Pays 1 the step the flip is consumed, re-arms once the flip comes back,
/// and pays a small 0.1 keep-alive while airborne after the flip was already
/// rewarded.
#[derive(Default)]
pub struct FlipReward {
    rewarded: bool,
}

impl FlipReward {
    /// Creates the reward.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RewardFunction for FlipReward {
    fn reset(&mut self, _initial_state: &GameState) {
        self.rewarded = false;
    }

    fn get_reward(&mut self, player: &PlayerData, _state: &GameState, _previous_action: &Action) -> f32 {
        if !player.has_flip && !self.rewarded {
            self.rewarded = true;
            return 1.0;
        } else if player.has_flip {
            self.rewarded = false;
        } else if !player.on_ground {
            return 0.1;
        }
        0.0
    }
}

/// Rewards collecting boost.
///
/// Pays 1 for a big pad (jump of more than 12 over the last seen amount),
/// 0.2 for any smaller gain. The tracker follows the boost amount on every
/// step, so draining boost never pays.
pub struct PickupBoostReward {
    last_boost: f32,
}

impl PickupBoostReward {
    /// Creates the reward.
    pub fn new() -> Self {
        Self { last_boost: 100.0 }
    }
}

impl Default for PickupBoostReward {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardFunction for PickupBoostReward {
    fn reset(&mut self, _initial_state: &GameState) {
        self.last_boost = 100.0;
    }

    fn get_reward(&mut self, player: &PlayerData, _state: &GameState, _previous_action: &Action) -> f32 {
        let boost = player.boost_amount;
        let reward = if boost > self.last_boost + 12.0 {
            1.0
        } else if boost > self.last_boost {
            0.2
        } else {
            0.0
        };
        self.last_boost = boost;
        reward
    }
}

/// Distance-to-goal reward with exponential falloff, after Liu et al.
///
/// Pays close to 1 at the target goal, decaying with distance on the scale
/// of [`CAR_MAX_SPEED`].
pub struct LiuDistancePlayerToGoalReward {
    own_goal: bool,
}

impl LiuDistancePlayerToGoalReward {
    /// Creates the reward; `own_goal` measures toward the player's own goal
    /// instead of the opponent's.
    pub fn new(own_goal: bool) -> Self {
        Self { own_goal }
    }
}

impl Default for LiuDistancePlayerToGoalReward {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RewardFunction for LiuDistancePlayerToGoalReward {
    fn reset(&mut self, _initial_state: &GameState) {}

    fn get_reward(&mut self, player: &PlayerData, _state: &GameState, _previous_action: &Action) -> f32 {
        let objective = if player.team_num == BLUE_TEAM && !self.own_goal
            || player.team_num == ORANGE_TEAM && self.own_goal
        {
            Vector3::from(ORANGE_GOAL_CENTER)
        } else {
            Vector3::from(BLUE_GOAL_CENTER)
        };
        let dist = (player.car_data.position - objective).norm();
        (-0.5 * dist / CAR_MAX_SPEED).exp()
    }
}

/// Rewards touching the ball off the ground.
///
/// Pays `(ball_height - 92)^exp - 1` when the player touches the ball while
/// airborne and the ball is at least `min_height` up, so higher touches pay
/// more.
pub struct JumpTouchReward {
    min_height: f32,
    exp: f32,
}

impl JumpTouchReward {
    /// Creates the reward with the given height floor and scaling exponent.
    pub fn new(min_height: f32, exp: f32) -> Self {
        Self { min_height, exp }
    }
}

impl Default for JumpTouchReward {
    fn default() -> Self {
        Self::new(92.0, 0.2)
    }
}

impl RewardFunction for JumpTouchReward {
    fn reset(&mut self, _initial_state: &GameState) {}

    fn get_reward(&mut self, player: &PlayerData, state: &GameState, _previous_action: &Action) -> f32 {
        if player.ball_touched && !player.on_ground && state.ball.position.z >= self.min_height {
            return (state.ball.position.z - 92.0).powf(self.exp) - 1.0;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::zero_action;
    use nalgebra::Vector3;

    fn player_at(car_id: usize, team_num: u8, pos: [f32; 3]) -> PlayerData {
        PlayerData {
            car_id,
            team_num,
            car_data: crate::state::PhysicsObject {
                position: Vector3::from(pos),
                ..Default::default()
            },
            has_flip: true,
            on_ground: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_team_spacing_penalty() {
        let me = player_at(0, 0, [0.0, 0.0, 17.0]);
        let state = GameState {
            players: vec![me.clone(), player_at(1, 0, [500.0, 0.0, 17.0])],
            ..Default::default()
        };
        let mut rf = TeamSpacingReward::default();
        let r = rf.get_reward(&me, &state, &zero_action());
        assert!((r - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_team_spacing_ignores_demoed_and_opponents() {
        let me = player_at(0, 0, [0.0, 0.0, 17.0]);
        let mut close_demoed = player_at(1, 0, [100.0, 0.0, 17.0]);
        close_demoed.is_demoed = true;
        let close_opponent = player_at(2, 1, [100.0, 0.0, 17.0]);
        let state = GameState {
            players: vec![me.clone(), close_demoed, close_opponent],
            ..Default::default()
        };
        let mut rf = TeamSpacingReward::default();
        assert_eq!(rf.get_reward(&me, &state, &zero_action()), 0.0);
    }

    #[test]
    fn test_flip_reward_sequence() {
        let state = GameState::default();
        let mut rf = FlipReward::new();
        let mut p = player_at(0, 0, [0.0, 0.0, 17.0]);

        // Flip still available: nothing.
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);

        // Flip consumed: pays once.
        p.has_flip = false;
        p.on_ground = false;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 1.0);

        // Still airborne without flip: keep-alive.
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.1);

        // Landed, flip back: re-arms silently.
        p.has_flip = true;
        p.on_ground = true;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);

        // Consumed again: pays again.
        p.has_flip = false;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 1.0);
    }

    #[test]
    fn test_pickup_boost_tiers() {
        let state = GameState::default();
        let mut rf = PickupBoostReward::new();
        let mut p = player_at(0, 0, [0.0, 0.0, 17.0]);

        // Boost drains below the starting tracker: nothing.
        p.boost_amount = 50.0;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);

        // Big pickup: more than 12 over the last amount.
        p.boost_amount = 70.0;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 1.0);

        // Small trickle.
        p.boost_amount = 75.0;
        assert!((rf.get_reward(&p, &state, &zero_action()) - 0.2).abs() < 1e-6);

        // No change.
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);
    }

    #[test]
    fn test_liu_distance_is_one_at_goal() {
        let state = GameState::default();
        let p = player_at(0, 0, ORANGE_GOAL_CENTER);
        let mut rf = LiuDistancePlayerToGoalReward::new(false);
        assert!((rf.get_reward(&p, &state, &zero_action()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_jump_touch() {
        let mut state = GameState::default();
        state.ball.position = Vector3::new(0.0, 0.0, 124.0);
        let mut p = player_at(0, 0, [0.0, 0.0, 100.0]);
        p.ball_touched = true;
        p.on_ground = false;

        let mut rf = JumpTouchReward::default();
        // (124 - 92)^0.2 - 1 = 2 - 1
        assert!((rf.get_reward(&p, &state, &zero_action()) - 1.0).abs() < 1e-5);

        // Grounded touches pay nothing.
        p.on_ground = true;
        assert_eq!(rf.get_reward(&p, &state, &zero_action()), 0.0);
    }
}
