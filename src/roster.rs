//! Roster trimming.
//!
//! Casual lobbies can contain more cars than the team composition the policy
//! was trained against. Before an observation is built, the roster is trimmed
//! down to the expected team sizes by repeatedly dropping whichever surplus
//! car is farthest from the ball.
use crate::state::{GameState, PlayerData};
use std::cmp::Ordering;

/// Trims `state.players` to at most `team_size` allies (including the car
/// with id `index`) and `team_size` opponents.
///
/// The car with id `index` is never removed. Under-populated sides pass
/// through untouched; rosters are never padded. Ties in farthest-distance are
/// broken by roster order and are not specified further.
pub fn trim_roster(state: &mut GameState, team: u8, index: usize, team_size: usize) {
    loop {
        let allies = count(state, |p| p.team_num == team && p.car_id != index);
        if allies <= team_size.saturating_sub(1) {
            break;
        }
        match farthest_from_ball(state, |p| p.team_num == team && p.car_id != index) {
            Some(i) => {
                state.players.remove(i);
            }
            None => break,
        }
    }
    loop {
        let opponents = count(state, |p| p.team_num != team);
        if opponents <= team_size {
            break;
        }
        match farthest_from_ball(state, |p| p.team_num != team) {
            Some(i) => {
                state.players.remove(i);
            }
            None => break,
        }
    }
}

fn count(state: &GameState, pred: impl Fn(&PlayerData) -> bool) -> usize {
    state.players.iter().filter(|p| pred(p)).count()
}

fn farthest_from_ball(
    state: &GameState,
    pred: impl Fn(&PlayerData) -> bool,
) -> Option<usize> {
    let ball = state.ball.position;
    state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| pred(p))
        .max_by(|(_, a), (_, b)| {
            let da = (ball - a.car_data.position).norm();
            let db = (ball - b.car_data.position).norm();
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
}
