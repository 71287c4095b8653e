use rand::Rng;

use crate::error::{NetError, Result};
use crate::math::{matrix::Matrix, vector::Vector};

/// One fully connected transition between two adjacent layers.
///
/// `weights` is `output_size × input_size` and `biases` has `output_size`
/// entries. Both are fixed once the layer is built.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix,
    biases: Vector,
}

impl DenseLayer {
    /// Builds a layer with weights then biases drawn uniformly from `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(input_size: usize, output_size: usize, rng: &mut R) -> DenseLayer {
        let weights = Matrix::random(output_size, input_size, rng);
        let biases = Vector::random(output_size, rng);

        DenseLayer { weights, biases }
    }

    /// Wraps explicit parameters, checking that `biases` matches the weight
    /// matrix's row count.
    pub fn from_parameters(weights: Matrix, biases: Vector) -> Result<DenseLayer> {
        if weights.rows() != biases.rows() {
            return Err(NetError::DimensionMismatch {
                operation: "DenseLayer::from_parameters",
                left: weights.shape(),
                right: (biases.rows(), 1),
            });
        }
        Ok(DenseLayer { weights, biases })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Vector {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.rows() * self.weights.cols() + self.biases.rows()
    }

    /// `sigmoid(W * input + b)`.
    pub fn feed_from(&self, input: &Vector) -> Result<Vector> {
        let z = (&self.weights * input)?;
        let mut a = (&z + &self.biases)?;
        a.apply_sigmoid();
        Ok(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_creation() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = DenseLayer::new(4, 3, &mut rng);
        assert_eq!(layer.weights().shape(), (3, 4));
        assert_eq!(layer.biases().rows(), 3);
        assert_eq!(layer.input_size(), 4);
        assert_eq!(layer.output_size(), 3);
        assert_eq!(layer.parameter_count(), 4 * 3 + 3);
    }

    #[test]
    fn test_from_parameters_checks_bias_length() {
        let weights = Matrix::zeros(2, 3);
        assert!(DenseLayer::from_parameters(weights.clone(), Vector::zeros(3)).is_err());
        assert!(DenseLayer::from_parameters(weights, Vector::zeros(2)).is_ok());
    }

    #[test]
    fn test_feed_from() {
        let weights = Matrix::from_data(1, 2, vec![1.0, 1.0]).unwrap();
        let biases = Vector::from_data(1, vec![-1.0]).unwrap();
        let layer = DenseLayer::from_parameters(weights, biases).unwrap();

        let input = Vector::from_data(2, vec![0.5, 0.5]).unwrap();
        let out = layer.feed_from(&input).unwrap();
        assert_eq!(out.as_slice(), &[0.5]);
    }

    #[test]
    fn test_feed_from_rejects_wrong_input_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = DenseLayer::new(4, 3, &mut rng);
        assert!(layer.feed_from(&Vector::zeros(3)).is_err());
    }
}
