//! Positional predicates shared by the conditional rewards.
//!
//! All predicates are team-relative: positions are flipped for the orange
//! team so "forward" always points at the opponent goal.
use crate::common_values::{BACK_WALL_Y, BLUE_GOAL_BACK, BLUE_TEAM, ORANGE_GOAL_BACK, ORANGE_TEAM};
use crate::state::{GameState, PlayerData};
use crate::util::scalar_projection;
use nalgebra::Vector3;

/// True when the player is in the opponent half.
pub fn player_crossed_halfway(player: &PlayerData) -> bool {
    let mut y = player.car_data.position.y;
    if player.team_num == ORANGE_TEAM {
        y = -y;
    }
    y > 0.0
}

/// True when the ball is in the opponent half, from `player`'s perspective.
pub fn ball_crossed_halfway(player: &PlayerData, state: &GameState) -> bool {
    let mut y = state.ball.position.y;
    if player.team_num == ORANGE_TEAM {
        y = -y;
    }
    y > 0.0
}

/// True when the player is deep in the goal quarter; `own_goal` flips which
/// goal counts.
pub fn player_at_goal(player: &PlayerData, own_goal: bool) -> bool {
    let mut y = player.car_data.position.y;
    if player.team_num == ORANGE_TEAM {
        y = -y;
    }
    if own_goal {
        y = -y;
    }
    y > BACK_WALL_Y / 2.0
}

/// True when the ball is deep in the goal quarter, from `player`'s
/// perspective; `own_goal` flips which goal counts.
pub fn ball_at_goal(player: &PlayerData, state: &GameState, own_goal: bool) -> bool {
    let mut y = state.ball.position.y;
    if player.team_num == ORANGE_TEAM {
        y = -y;
    }
    if own_goal {
        y = -y;
    }
    y > BACK_WALL_Y / 2.0
}

/// True when the player's velocity has a positive component toward the
/// target goal.
pub fn player_approaching_goal(player: &PlayerData, own_goal: bool) -> bool {
    let objective = if player.team_num == BLUE_TEAM && !own_goal
        || player.team_num == ORANGE_TEAM && own_goal
    {
        Vector3::from(ORANGE_GOAL_BACK)
    } else {
        Vector3::from(BLUE_GOAL_BACK)
    };
    let pos_diff = objective - player.car_data.position;
    scalar_projection(&player.car_data.linear_velocity, &pos_diff) > 0.0
}

/// True when the ball's velocity has a positive component toward the goal
/// `team` shoots at.
pub fn ball_approaching_goal(state: &GameState, team: u8) -> bool {
    let objective = if team == ORANGE_TEAM {
        Vector3::from(ORANGE_GOAL_BACK)
    } else {
        Vector3::from(BLUE_GOAL_BACK)
    };
    let pos_diff = objective - state.ball.position;
    scalar_projection(&state.ball.linear_velocity, &pos_diff) > 0.0
}

/// True when the player is forward and play is moving toward the opponent
/// goal. Demolished players never attack.
pub fn attacking(player: &PlayerData, state: &GameState) -> bool {
    if player.is_demoed {
        return false;
    }
    player_crossed_halfway(player)
        && (player_approaching_goal(player, false)
            || ball_approaching_goal(state, player.team_num)
            || ball_at_goal(player, state, false))
}

/// True when the player is back and not committed forward, or the ball
/// threatens its own goal. Demolished players never defend.
pub fn defending(player: &PlayerData, state: &GameState) -> bool {
    if player.is_demoed {
        return false;
    }
    !player_crossed_halfway(player)
        && (!(player_approaching_goal(player, false) && ball_approaching_goal(state, player.team_num))
            || ball_at_goal(player, state, true))
}
