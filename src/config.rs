//! Configuration of [`Bot`](crate::Bot).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Bot`](crate::Bot).
///
/// Fixed at construction; there is no dynamic reconfiguration.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct BotConfig {
    /// The decision period in simulated ticks. Must match the value the
    /// policy was trained with.
    pub tick_skip: u32,

    /// Expected cars per team, including self.
    pub team_size: usize,

    /// Conversion factor from the wall-clock accumulator to simulated-tick
    /// units.
    pub tick_multiplier: f32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            tick_skip: 12,
            team_size: 3,
            tick_multiplier: 120.0,
        }
    }
}

impl BotConfig {
    /// Sets the decision period in ticks.
    pub fn tick_skip(mut self, v: u32) -> Self {
        self.tick_skip = v;
        self
    }

    /// Sets the expected team size.
    pub fn team_size(mut self, v: usize) -> Self {
        self.team_size = v;
        self
    }

    /// Sets the wall-clock-to-ticks conversion factor.
    pub fn tick_multiplier(mut self, v: f32) -> Self {
        self.tick_multiplier = v;
        self
    }

    /// Constructs [`BotConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`BotConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
