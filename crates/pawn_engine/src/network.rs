// Untrained feed-forward network: the board encoding goes in, one score per square comes out
use log::{trace, warn};
use pawn_core::{BoardEncoding, Move, MoveSelector};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::EngineError;

// Network shape
const INPUT_NODES: usize = 64;      // One per square of the encoding
const HIDDEN_NODES: usize = 100;
const OUTPUT_NODES: usize = 64;     // One per destination square

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // Row-major
}

impl Matrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R, low: f64, high: f64) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows * cols).map(|_| rng.gen_range(low..high)).collect(),
        }
    }

    pub fn from_row(values: &[f64]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, EngineError> {
        self.check_inner(other)?;
        let mut result = Matrix::new(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let cell = (0..self.cols).map(|i| self.get(r, i) * other.get(i, c)).sum();
                result.set(r, c, cell);
            }
        }
        Ok(result)
    }

    // Same product as `multiply`, with every output cell computed on the rayon pool.
    pub fn par_multiply(&self, other: &Matrix) -> Result<Matrix, EngineError> {
        self.check_inner(other)?;
        let mut result = Matrix::new(self.rows, other.cols);
        let out_cols = other.cols;
        result.data.par_iter_mut().enumerate().for_each(|(index, cell)| {
            let (r, c) = (index / out_cols, index % out_cols);
            *cell = (0..self.cols).map(|i| self.get(r, i) * other.get(i, c)).sum();
        });
        Ok(result)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, EngineError> {
        if self.shape() != other.shape() {
            return Err(EngineError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::new(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                result.set(c, r, self.get(r, c));
            }
        }
        result
    }

    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Matrix {
        self.data.iter_mut().for_each(|value| *value = f(*value));
        self
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn check_inner(&self, other: &Matrix) -> Result<(), EngineError> {
        if self.cols != other.rows {
            return Err(EngineError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    input_hidden: Matrix,
    hidden_output: Matrix,
}

impl NeuralNetwork {
    pub fn new<R: Rng>(inputs: usize, hidden: usize, outputs: usize, rng: &mut R) -> Self {
        Self {
            input_hidden: Matrix::random(inputs, hidden, rng, 0.0, 1.0),
            hidden_output: Matrix::random(hidden, outputs, rng, 0.0, 1.0),
        }
    }

    // (inputs, outputs)
    pub fn shape(&self) -> (usize, usize) {
        (self.input_hidden.rows, self.hidden_output.cols)
    }

    /// Runs one forward pass and returns the outputs scaled to sum to one.
    pub fn propagate(&self, inputs: &[i8]) -> Result<Vec<f64>, EngineError> {
        let values: Vec<f64> = inputs.iter().map(|&v| f64::from(v)).collect();
        let input = Matrix::from_row(&values);
        let hidden = input.par_multiply(&self.input_hidden)?.map(sigmoid);
        let output = hidden.par_multiply(&self.hidden_output)?;

        let total = output.sum();
        Ok(output.values().iter().map(|v| v / total).collect())
    }
}

pub struct NetworkMover {
    network: NeuralNetwork,
}

impl NetworkMover {
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            network: NeuralNetwork::new(INPUT_NODES, HIDDEN_NODES, OUTPUT_NODES, &mut rng),
        }
    }

    /// Wraps a prebuilt network. It must read the whole board encoding and
    /// score every square, since moves are ranked by destination square.
    pub fn with_network(network: NeuralNetwork) -> Result<Self, EngineError> {
        let (inputs, outputs) = network.shape();
        if inputs != INPUT_NODES || outputs != OUTPUT_NODES {
            return Err(EngineError::NetworkShape {
                found_inputs: inputs,
                found_outputs: outputs,
            });
        }
        Ok(Self { network })
    }
}

impl MoveSelector for NetworkMover {
    // Plays the legal move whose destination square scores highest.
    fn choose_move(&mut self, encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
        let scores = match self.network.propagate(encoding) {
            Ok(scores) => scores,
            Err(err) => {
                warn!("network failed: {}", err);
                return None;
            }
        };
        trace!("network scores: {:?}", scores);

        let score = |mv: &Move| scores.get(mv.to.index()).copied().unwrap_or(f64::MIN);
        legal_moves
            .iter()
            .copied()
            .reduce(|best, mv| if score(&mv) > score(&best) { mv } else { best })
    }

    fn name(&self) -> &str {
        "network"
    }
}
