//! Multilayer perceptron evaluated without an ML backend.
use super::Mat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Multilayer perceptron with ReLU activations between layers.
///
/// The final layer is linear; callers apply their own output mapping
/// (argmax over a lookup table, tanh squashing, ...).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mlp {
    /// Weights of layers.
    ws: Vec<Mat>,

    /// Biases of layers.
    bs: Vec<Mat>,
}

impl Mlp {
    /// Creates an MLP from per-layer weights and biases.
    ///
    /// Panics if the two lists have different lengths.
    pub fn new(ws: Vec<Mat>, bs: Vec<Mat>) -> Self {
        assert_eq!(ws.len(), bs.len(), "one bias per layer");
        Self { ws, bs }
    }

    /// Forward pass on a column vector.
    pub fn forward(&self, x: &Mat) -> Mat {
        let n_layers = self.ws.len();
        let mut x = x.clone();
        for i in 0..n_layers {
            x = self.ws[i].matmul(&x).add(&self.bs[i]);
            if i != n_layers - 1 {
                x = x.relu();
            }
        }
        x
    }

    /// Loads parameters exported at training time from a bincode file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mlp = bincode::deserialize_from(BufReader::new(file))?;
        Ok(mlp)
    }

    /// Saves parameters as a bincode file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        bincode::serialize_into(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn identity_2x2() -> Mat {
        Mat::new(2, 2, vec![1.0, 0.0, 0.0, 1.0])
    }

    #[test]
    fn test_forward_relu_between_layers() {
        // Two identity layers; the first bias drives one element negative,
        // which the inner ReLU clips before the second layer adds it back.
        let mlp = Mlp::new(
            vec![identity_2x2(), identity_2x2()],
            vec![
                Mat::column(vec![0.0, -2.0]),
                Mat::column(vec![1.0, 1.0]),
            ],
        );
        let y = mlp.forward(&Mat::column(vec![1.0, 1.0]));
        assert_eq!(y, Mat::column(vec![2.0, 1.0]));
    }

    #[test]
    fn test_final_layer_is_linear() {
        let mlp = Mlp::new(vec![identity_2x2()], vec![Mat::column(vec![-5.0, 0.0])]);
        let y = mlp.forward(&Mat::column(vec![1.0, 1.0]));
        // A ReLU output layer would have clipped -4 to 0.
        assert_eq!(y, Mat::column(vec![-4.0, 1.0]));
    }

    #[test]
    fn test_save_load_round_trip() -> Result<()> {
        let mlp = Mlp::new(vec![identity_2x2()], vec![Mat::column(vec![0.5, -0.5])]);
        let dir = TempDir::new("mlp_params")?;
        let path = dir.path().join("params.bin");
        mlp.save(&path)?;
        let mlp_ = Mlp::load(&path)?;
        assert_eq!(mlp, mlp_);
        Ok(())
    }
}
