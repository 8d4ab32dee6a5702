//! Minimal dense matrix used by the backend-free policy.
use serde::{Deserialize, Serialize};

/// A dense row-major f32 matrix.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Mat {
    /// Creates a matrix from row-major data.
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), rows * cols, "matrix data/shape mismatch");
        Self { rows, cols, data }
    }

    /// Creates a column vector.
    pub fn column(data: Vec<f32>) -> Self {
        let rows = data.len();
        Self {
            rows,
            cols: 1,
            data,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix product `self * x`.
    ///
    /// Panics if the inner dimensions disagree.
    pub fn matmul(&self, x: &Mat) -> Self {
        assert_eq!(
            self.cols, x.rows,
            "matmul dimension mismatch: {}x{} * {}x{}",
            self.rows, self.cols, x.rows, x.cols
        );
        let (m, l, n) = (self.rows, self.cols, x.cols);
        let mut data = vec![0.0f32; m * n];
        for i in 0..m {
            for j in 0..n {
                let mut acc = 0.0;
                for k in 0..l {
                    acc += self.data[i * l + k] * x.data[k * n + j];
                }
                data[i * n + j] = acc;
            }
        }
        Self {
            rows: m,
            cols: n,
            data,
        }
    }

    /// Element-wise sum.
    ///
    /// Panics if the shapes disagree.
    pub fn add(&self, x: &Mat) -> Self {
        assert_eq!(
            (self.rows, self.cols),
            (x.rows, x.cols),
            "add shape mismatch"
        );
        let data = self
            .data
            .iter()
            .zip(x.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Element-wise rectifier.
    pub fn relu(&self) -> Self {
        self.map(|a| if a < 0.0 { 0.0 } else { a })
    }

    /// Element-wise hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        self.map(f32::tanh)
    }

    /// Index of the largest element, scanning row-major. Ties keep the
    /// earliest index.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (i, v) in self.data.iter().enumerate() {
            if *v > self.data[best] {
                best = i;
            }
        }
        best
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| f(*a)).collect(),
        }
    }
}

impl From<Vec<f32>> for Mat {
    fn from(x: Vec<f32>) -> Self {
        Self::column(x)
    }
}
