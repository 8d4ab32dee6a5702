//! Internal game-state model decoded from raw packets.
//!
//! [`GameState`] is the representation observation builders, policies and
//! reward functions operate on. It is decoded from a [`GameTickPacket`]
//! once per decision period, during the observe phase.
//!
//! [`GameTickPacket`]: crate::packet::GameTickPacket
mod game_state;
mod physics;
mod player;
pub use game_state::GameState;
pub use physics::PhysicsObject;
pub use player::PlayerData;
