//! Decoded world state.
use super::{PhysicsObject, PlayerData};
use crate::common_values::{
    BIG_PAD_RECHARGE_SECONDS, SMALL_PAD_RECHARGE_SECONDS, TICKS_PER_SECOND,
};
use crate::packet::{FieldInfo, GameTickPacket};

/// Decoded world state: all cars, the ball and the boost pads.
///
/// Boost pads are exposed as active flags (`1.0` when the pad can be picked
/// up). Packets only carry the pickup flag, so the remaining recharge time of
/// each pad is tracked internally and decayed by the elapsed ticks passed to
/// [`GameState::decode`].
#[derive(Clone, Debug, Default)]
pub struct GameState {
    /// All observed cars, in packet order.
    pub players: Vec<PlayerData>,
    /// Ball state.
    pub ball: PhysicsObject,
    /// Active flag per boost pad, `1.0` or `0.0`, in field-info order.
    pub boost_pads: Vec<f32>,
    /// Goals scored by the blue team.
    pub blue_score: u32,
    /// Goals scored by the orange team.
    pub orange_score: u32,

    // Seconds until each pad respawns, 0 when active.
    pub(crate) pad_timers: Vec<f32>,
    // Full recharge delay per pad, from field info.
    pub(crate) pad_recharge: Vec<f32>,
}

impl GameState {
    /// Creates an empty state sized for the given field.
    pub fn new(field_info: &FieldInfo) -> Self {
        let n = field_info.boost_pads.len();
        let pad_recharge = field_info
            .boost_pads
            .iter()
            .map(|pad| {
                if pad.is_full_boost {
                    BIG_PAD_RECHARGE_SECONDS
                } else {
                    SMALL_PAD_RECHARGE_SECONDS
                }
            })
            .collect();
        Self {
            boost_pads: vec![1.0; n],
            pad_timers: vec![0.0; n],
            pad_recharge,
            ..Self::default()
        }
    }

    /// Decodes a raw packet into this state.
    ///
    /// `ticks_elapsed` is the number of simulated ticks since the previous
    /// decode; it drives the internal boost-pad recharge timers.
    pub fn decode(&mut self, packet: &GameTickPacket, ticks_elapsed: f32) {
        self.ball = PhysicsObject::from(&packet.ball.physics);

        self.players.clear();
        for (car_id, raw) in packet.players.iter().enumerate() {
            self.players.push(PlayerData {
                car_id,
                team_num: raw.team,
                car_data: PhysicsObject::from(&raw.physics),
                boost_amount: raw.boost,
                on_ground: raw.has_wheel_contact,
                has_flip: !raw.double_jumped,
                is_demoed: raw.is_demolished,
                ball_touched: raw.ball_touched,
            });
        }

        for team in &packet.teams {
            match team.team_index {
                0 => self.blue_score = team.score,
                _ => self.orange_score = team.score,
            }
        }

        let dt = ticks_elapsed / TICKS_PER_SECOND;
        for (i, pad) in packet.boost_pads.iter().enumerate() {
            if i >= self.boost_pads.len() {
                break;
            }
            if pad.is_active {
                self.pad_timers[i] = 0.0;
                self.boost_pads[i] = 1.0;
            } else {
                // A pad seen active last decode was just taken; start its timer.
                if self.boost_pads[i] == 1.0 {
                    self.pad_timers[i] = self.pad_recharge[i];
                } else {
                    self.pad_timers[i] = (self.pad_timers[i] - dt).max(0.0);
                }
                self.boost_pads[i] = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::{BallInfo, BoostPad, GameInfo, PadInfo, Physics, PlayerInfo, TeamInfo};
    use nalgebra::Vector3;

    fn field_with_pads() -> FieldInfo {
        FieldInfo {
            boost_pads: vec![
                BoostPad {
                    location: Vector3::new(0.0, -4240.0, 70.0),
                    is_full_boost: true,
                },
                BoostPad {
                    location: Vector3::new(0.0, -2816.0, 70.0),
                    is_full_boost: false,
                },
            ],
        }
    }

    fn packet_with_one_car() -> GameTickPacket {
        GameTickPacket {
            game_info: GameInfo {
                seconds_elapsed: 1.0,
                is_kickoff_pause: false,
                is_round_active: true,
            },
            ball: BallInfo {
                physics: Physics {
                    location: Vector3::new(0.0, 0.0, 93.0),
                    velocity: Vector3::new(0.0, 100.0, 0.0),
                    ..Physics::default()
                },
            },
            players: vec![PlayerInfo {
                physics: Physics {
                    location: Vector3::new(100.0, -200.0, 17.0),
                    ..Physics::default()
                },
                team: 1,
                boost: 33.0,
                is_demolished: false,
                has_wheel_contact: true,
                jumped: false,
                double_jumped: true,
                ball_touched: false,
            }],
            boost_pads: vec![PadInfo { is_active: true }, PadInfo { is_active: true }],
            teams: vec![
                TeamInfo {
                    team_index: 0,
                    score: 2,
                },
                TeamInfo {
                    team_index: 1,
                    score: 1,
                },
            ],
        }
    }

    #[test]
    fn test_decode_players_and_ball() {
        let mut state = GameState::new(&field_with_pads());
        state.decode(&packet_with_one_car(), 0.0);

        assert_eq!(state.players.len(), 1);
        let p = &state.players[0];
        assert_eq!(p.car_id, 0);
        assert_eq!(p.team_num, 1);
        assert_eq!(p.boost_amount, 33.0);
        assert!(p.on_ground);
        assert!(!p.has_flip);
        assert_eq!(p.car_data.position, Vector3::new(100.0, -200.0, 17.0));
        assert_eq!(state.ball.position, Vector3::new(0.0, 0.0, 93.0));
        assert_eq!(state.blue_score, 2);
        assert_eq!(state.orange_score, 1);
    }

    #[test]
    fn test_pad_timer_starts_and_decays() {
        let mut state = GameState::new(&field_with_pads());
        let mut packet = packet_with_one_car();
        state.decode(&packet, 0.0);
        assert_eq!(state.boost_pads, vec![1.0, 1.0]);

        // Big pad taken: timer primed to its full recharge delay.
        packet.boost_pads[0].is_active = false;
        state.decode(&packet, 12.0);
        assert_eq!(state.boost_pads[0], 0.0);
        assert_eq!(state.pad_timers[0], 10.0);

        // 120 ticks later the timer has lost one second.
        state.decode(&packet, 120.0);
        assert!((state.pad_timers[0] - 9.0).abs() < 1e-6);

        // Respawn: flag and timer go back to active.
        packet.boost_pads[0].is_active = true;
        state.decode(&packet, 12.0);
        assert_eq!(state.boost_pads[0], 1.0);
        assert_eq!(state.pad_timers[0], 0.0);
    }
}
