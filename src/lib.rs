#![warn(missing_docs)]
//! An RLBot runtime for RLGym-trained agents.
//!
//! The host driver delivers one [`packet::GameTickPacket`] per simulation
//! frame; [`Bot`] decodes it on a fixed decision period, builds an
//! observation with an [`ObsBuilder`], feeds it to a [`Policy`] and converts
//! the resulting action vector into [`controls::ControllerState`] input,
//! repeating the last controls on the frames in between.
//!
//! The [`reward`] module holds the reward-shaping functions used to train
//! such policies offline; it is not part of the runtime loop.
pub mod common_values;
pub mod config;
pub mod controls;
pub mod error;
pub mod packet;
pub mod policy;
pub mod reward;
pub mod roster;
pub mod state;
pub mod util;

mod base;
pub use base::{zero_action, Action, ObsBuilder, Policy, RewardFunction, ACTION_LEN};

mod bot;
pub use bot::{Bot, KickoffHook};
