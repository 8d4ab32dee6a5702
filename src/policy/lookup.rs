//! Discrete policy over an action lookup table.
use super::Mlp;
use crate::base::{Action, Policy, ACTION_LEN};
use crate::error::BotError;
use crate::state::GameState;
use anyhow::Result;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// A policy scoring the rows of a fixed action table.
///
/// The network maps an observation vector to one logit per table row; the
/// row with the largest logit becomes the action. This is the usual export
/// format of discrete RLGym agents.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LookupTablePolicy {
    net: Mlp,
    table: Vec<Vec<f32>>,
}

impl LookupTablePolicy {
    /// Creates a policy from a network and an action table.
    ///
    /// Fails if the table is empty or any row is not a full action vector.
    pub fn new(net: Mlp, table: Vec<Vec<f32>>) -> Result<Self> {
        if table.is_empty() {
            return Err(BotError::ActionTableError("empty table".into()).into());
        }
        for (i, row) in table.iter().enumerate() {
            if row.len() != ACTION_LEN {
                return Err(BotError::ActionTableError(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    ACTION_LEN
                ))
                .into());
            }
        }
        Ok(Self { net, table })
    }

    /// Loads a policy exported at training time from a bincode file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(&path).map_err(|e| {
            BotError::ParamFileError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let policy: Self = bincode::deserialize_from(BufReader::new(file))?;
        // Revalidate: the file may come from a different exporter version.
        Self::new(policy.net, policy.table)
    }

    /// Number of rows in the action table.
    pub fn n_actions(&self) -> usize {
        self.table.len()
    }
}

impl Policy<Array1<f32>> for LookupTablePolicy {
    fn act(&mut self, obs: &Array1<f32>, _state: &GameState) -> Action {
        let logits = self.net.forward(&obs.to_vec().into());
        let ix = logits.argmax();
        Array1::from(self.table[ix].clone())
    }
}
