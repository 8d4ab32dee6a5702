//! The per-frame decision loop.
use crate::base::{zero_action, Action, ObsBuilder, Policy};
use crate::config::BotConfig;
use crate::controls::ControllerState;
use crate::packet::{FieldInfo, GameTickPacket};
use crate::roster::trim_roster;
use crate::state::GameState;
use log::{info, trace};

/// Hook invoked on kickoff-pause boundaries, before the roster is trimmed.
///
/// Receives the observation builder, the freshly decoded state and the
/// persisted action vector. Stacking observation builders use it to clear
/// their window at kickoffs; for plain builders it should stay unset.
pub type KickoffHook<OB> = Box<dyn FnMut(&mut OB, &mut GameState, &mut Action)>;

/// A bot driving one car: decodes packets on a fixed decision period, feeds
/// observations to a policy and repeats the resulting controls in between.
///
/// The host loop calls [`Bot::get_output`] once per simulation frame. Each
/// call runs exactly one of three phases:
///
/// * **Observe** - first call of a decision period: decode the packet, trim
///   the roster, build and cache the observation.
/// * **Act** - once per period, near the period boundary: run the policy on
///   the cached observation and refresh the controller output. Triggered two
///   ticks before the boundary to absorb processing latency.
/// * **Idle** - everything else: only the time accumulator advances.
///
/// The previously computed controller output is returned unconditionally, so
/// the host always receives a valid value.
///
/// All state is exclusively owned by the calling thread; no call suspends or
/// blocks.
pub struct Bot<OB, P>
where
    OB: ObsBuilder,
    P: Policy<OB::Obs>,
{
    name: String,
    team: u8,
    index: usize,
    config: BotConfig,

    obs_builder: OB,
    policy: P,
    kickoff_hook: Option<KickoffHook<OB>>,

    game_state: GameState,
    controls: ControllerState,
    action: Action,
    current_obs: Option<OB::Obs>,

    // Wall-clock delta accumulated since the last period reset. Converted to
    // simulated-tick units by multiplying the whole accumulator with
    // tick_multiplier each call; see get_output.
    ticks: f32,
    prev_time: f32,
    observed: bool,
    acted: bool,
}

impl<OB, P> Bot<OB, P>
where
    OB: ObsBuilder,
    P: Policy<OB::Obs>,
{
    /// Creates a bot for the car at packet index `index` on team `team`.
    pub fn new(
        name: impl Into<String>,
        team: u8,
        index: usize,
        config: BotConfig,
        obs_builder: OB,
        policy: P,
    ) -> Self {
        let name = name.into();
        info!("{} ready - index: {}", name, index);
        let ticks = config.tick_skip as f32;
        Self {
            name,
            team,
            index,
            config,
            obs_builder,
            policy,
            kickoff_hook: None,
            game_state: GameState::default(),
            controls: ControllerState::default(),
            action: zero_action(),
            current_obs: None,
            ticks,
            prev_time: 0.0,
            observed: false,
            acted: false,
        }
    }

    /// Installs the kickoff-pause hook. No hook is installed by default and
    /// kickoff pauses then have no effect beyond the regular observe phase.
    pub fn set_kickoff_hook(&mut self, hook: KickoffHook<OB>) {
        self.kickoff_hook = Some(hook);
    }

    /// (Re)initializes the bot once the game is active and field info is
    /// available.
    ///
    /// Primes the accumulator to a full period so the first frame both
    /// observes and completes a period immediately.
    pub fn initialize(&mut self, field_info: &FieldInfo) {
        info!("{} initializing agent: index {}", self.name, self.index);
        self.game_state = GameState::new(field_info);
        self.ticks = self.config.tick_skip as f32;
        self.prev_time = 0.0;
        self.controls = ControllerState::default();
        self.action = zero_action();
        self.current_obs = None;
        self.observed = false;
        self.acted = false;
    }

    /// Runs one frame of the decision loop and returns the controls to apply.
    ///
    /// `packet.game_info.seconds_elapsed` is expected to be non-decreasing
    /// across calls. Thresholds are soft (`>=`), so irregular frame times
    /// cannot stall a period; any overshoot past the period boundary is
    /// discarded by the reset rather than carried over.
    pub fn get_output(&mut self, packet: &GameTickPacket) -> ControllerState {
        let cur_time = packet.game_info.seconds_elapsed;
        let delta = cur_time - self.prev_time;
        self.prev_time = cur_time;
        // The accumulator keeps raw wall-clock units; the tick count is
        // derived from the whole accumulator before this frame's delta lands.
        let ticks_elapsed = self.ticks * self.config.tick_multiplier;
        self.ticks += delta;

        if !self.observed {
            trace!("{}: observe phase, ticks_elapsed {}", self.name, ticks_elapsed);
            self.game_state.decode(packet, ticks_elapsed);
            if packet.game_info.is_kickoff_pause && !packet.game_info.is_round_active {
                if let Some(hook) = self.kickoff_hook.as_mut() {
                    trace!("{}: kickoff pause hook", self.name);
                    hook(&mut self.obs_builder, &mut self.game_state, &mut self.action);
                    self.controls.apply_action(&self.action);
                }
            }
            trim_roster(
                &mut self.game_state,
                self.team,
                self.index,
                self.config.team_size,
            );
            let obs = self.obs_builder.build_obs(
                &self.game_state.players[self.index],
                &self.game_state,
                &self.action,
            );
            self.current_obs = Some(obs);
            self.observed = true;
        } else if ticks_elapsed >= self.config.tick_skip as f32 - 2.0 && !self.acted {
            // Observe always precedes Act within a period, so a cached
            // observation must exist here.
            debug_assert!(
                self.current_obs.is_some(),
                "act phase without a cached observation"
            );
            if let Some(obs) = self.current_obs.as_ref() {
                trace!("{}: act phase, ticks_elapsed {}", self.name, ticks_elapsed);
                self.action = self.policy.act(obs, &self.game_state);
                self.controls.apply_action(&self.action);
                self.acted = true;
            }
        }

        // Period completion is checked independently of the phases above and
        // can co-occur with the act phase.
        if ticks_elapsed >= self.config.tick_skip as f32 - 1.0 {
            trace!("{}: period reset, ticks_elapsed {}", self.name, ticks_elapsed);
            self.ticks = 0.0;
            self.observed = false;
            self.acted = false;
        }

        self.controls.clone()
    }

    /// The configuration the bot was built with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The most recently decoded state.
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }
}
