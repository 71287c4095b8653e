use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{NetError, Result};
use crate::layers::dense::DenseLayer;
use crate::math::{matrix::Matrix, vector::Vector};
use crate::network::config::NetworkConfig;

/// A stack of sigmoid dense layers plus one activation buffer per layer.
///
/// `layers[i]` maps layer `i` (width `sizes[i]`) onto layer `i + 1`
/// (width `sizes[i + 1]`). `activations[i]` always has `sizes[i]` entries and
/// holds the output of the most recent [`Network::feed_forward`] call.
#[derive(Debug, Clone)]
pub struct Network {
    sizes: Vec<usize>,
    layers: Vec<DenseLayer>,
    activations: Vec<Vector>,
}

impl Network {
    /// Builds a randomly initialized network using the thread-local RNG.
    pub fn new(sizes: &[usize]) -> Result<Network> {
        Network::with_rng(sizes, &mut rand::thread_rng())
    }

    /// Builds a network, drawing each transition's weights then biases from
    /// `rng` in layer order.
    pub fn with_rng<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Network> {
        validate_topology(sizes)?;

        let layers = sizes.windows(2)
            .map(|pair| DenseLayer::new(pair[0], pair[1], &mut *rng))
            .collect();

        Ok(Network::assemble(sizes, layers))
    }

    /// Builds a network from a [`NetworkConfig`]; a seeded config always
    /// yields the same weights.
    pub fn from_config(config: &NetworkConfig) -> Result<Network> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::with_rng(&config.sizes, &mut rng)
    }

    /// Builds a network around caller-supplied parameters.
    ///
    /// `weights[i]` must be `sizes[i + 1] × sizes[i]` and `biases[i]` must have
    /// `sizes[i + 1]` entries.
    pub fn from_parameters(
        sizes: &[usize],
        weights: Vec<Matrix>,
        biases: Vec<Vector>,
    ) -> Result<Network> {
        validate_topology(sizes)?;

        let transitions = sizes.len() - 1;
        if weights.len() != transitions || biases.len() != transitions {
            return Err(NetError::InvalidTopology(format!(
                "{} layer sizes need {} weight matrices and bias vectors, got {} and {}",
                sizes.len(),
                transitions,
                weights.len(),
                biases.len()
            )));
        }

        let mut layers = Vec::with_capacity(transitions);
        for (i, (w, b)) in weights.into_iter().zip(biases).enumerate() {
            let expected = (sizes[i + 1], sizes[i]);
            if w.shape() != expected {
                return Err(NetError::DimensionMismatch {
                    operation: "Network::from_parameters",
                    left: expected,
                    right: w.shape(),
                });
            }
            layers.push(DenseLayer::from_parameters(w, b)?);
        }

        Ok(Network::assemble(sizes, layers))
    }

    fn assemble(sizes: &[usize], layers: Vec<DenseLayer>) -> Network {
        let activations = sizes.iter().map(|&n| Vector::zeros(n)).collect();
        let network = Network {
            sizes: sizes.to_vec(),
            layers,
            activations,
        };
        debug!(
            sizes = ?network.sizes,
            parameters = network.parameter_count(),
            "built network"
        );
        network
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn layer_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Activation buffers from the last forward pass; all zeros before the
    /// first one.
    pub fn activations(&self) -> &[Vector] {
        &self.activations
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(DenseLayer::parameter_count).sum()
    }

    /// Forward pass; stores every layer's activations for inspection and
    /// returns the output layer's values.
    ///
    /// `input` must have `sizes[0]` entries, each in `[0, 1]`. On error no
    /// buffer is touched.
    pub fn feed_forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let input = self.check_input(input)?;
        self.activations[0] = input;

        for (i, layer) in self.layers.iter().enumerate() {
            trace!(layer = i + 1, "weights: {}", layer.weights());
            trace!(layer = i + 1, "input: {}", self.activations[i]);

            let next = layer.feed_from(&self.activations[i])?;
            debug!(layer = i + 1, from = layer.input_size(), to = layer.output_size(), "computed layer");
            self.activations[i + 1] = next;
        }

        Ok(self.activations[self.sizes.len() - 1].as_slice().to_vec())
    }

    /// Same computation as [`Network::feed_forward`] but with scratch
    /// buffers, leaving the stored activations alone.
    pub fn evaluate(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = self.check_input(input)?;
        for layer in &self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(current.into_inner())
    }

    fn check_input(&self, input: &[f64]) -> Result<Vector> {
        let expected = self.sizes[0];
        if input.len() != expected {
            return Err(NetError::InputShapeMismatch {
                expected,
                actual: input.len(),
            });
        }
        if let Some((index, &value)) = input.iter()
            .enumerate()
            .find(|(_, x)| !(0.0..=1.0).contains(*x))
        {
            return Err(NetError::InputRangeError { index, value });
        }
        Vector::from_data(expected, input.to_vec())
    }
}

fn validate_topology(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(NetError::InvalidTopology("at least one layer is required".to_string()));
    }
    if let Some(i) = sizes.iter().position(|&n| n == 0) {
        return Err(NetError::InvalidTopology(format!("layer {i} has zero width")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(sizes: &[usize]) -> Network {
        Network::with_rng(sizes, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_network_shapes() {
        let net = seeded(&[6, 3, 3, 1]);
        assert_eq!(net.layer_count(), 4);
        assert_eq!(net.layers().len(), 3);

        let shapes: Vec<_> = net.layers().iter().map(|l| l.weights().shape()).collect();
        assert_eq!(shapes, vec![(3, 6), (3, 3), (1, 3)]);

        let bias_rows: Vec<_> = net.layers().iter().map(|l| l.biases().rows()).collect();
        assert_eq!(bias_rows, vec![3, 3, 1]);

        let activation_rows: Vec<_> = net.activations().iter().map(Vector::rows).collect();
        assert_eq!(activation_rows, vec![6, 3, 3, 1]);
        assert!(net.activations().iter().all(|a| a.as_slice().iter().all(|&x| x == 0.0)));
        assert_eq!(net.parameter_count(), 18 + 3 + 9 + 3 + 3 + 1);
    }

    #[test]
    fn test_invalid_topology() {
        assert!(matches!(Network::new(&[]), Err(NetError::InvalidTopology(_))));
        assert!(matches!(Network::new(&[3, 0, 1]), Err(NetError::InvalidTopology(_))));
    }

    #[test]
    fn test_single_layer_network_is_identity() {
        let mut net = seeded(&[3]);
        assert!(net.layers().is_empty());
        assert_eq!(net.feed_forward(&[0.2, 0.4, 1.0]).unwrap(), vec![0.2, 0.4, 1.0]);
    }

    #[test]
    fn test_feed_forward_with_fixed_parameters() {
        let weights = Matrix::from_data(1, 2, vec![1.0, 1.0]).unwrap();
        let biases = Vector::from_data(1, vec![0.0]).unwrap();
        let mut net = Network::from_parameters(&[2, 1], vec![weights], vec![biases]).unwrap();

        assert_eq!(net.feed_forward(&[0.0, 0.0]).unwrap(), vec![0.5]);
        assert_eq!(net.activations()[1].as_slice(), &[0.5]);
    }

    #[test]
    fn test_from_parameters_checks_shapes() {
        let biases = vec![Vector::zeros(1)];
        let transposed = vec![Matrix::zeros(2, 1)];
        assert!(matches!(
            Network::from_parameters(&[2, 1], transposed, biases.clone()),
            Err(NetError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Network::from_parameters(&[2, 1], vec![], biases),
            Err(NetError::InvalidTopology(_))
        ));
    }

    #[test]
    fn test_input_checks_leave_buffers_untouched() {
        let mut net = seeded(&[2, 2]);
        assert_eq!(
            net.feed_forward(&[0.5]),
            Err(NetError::InputShapeMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(
            net.feed_forward(&[0.5, -0.0001]),
            Err(NetError::InputRangeError { index: 1, value: -0.0001 })
        );
        assert!(net.feed_forward(&[f64::NAN, 0.5]).is_err());
        assert!(net.activations()[0].as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut net = seeded(&[4, 3, 2]);
        let input = [0.1, 0.9, 0.5, 0.0];
        let first = net.feed_forward(&input).unwrap();
        let second = net.feed_forward(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(net.evaluate(&input).unwrap(), first);
    }

    #[test]
    fn test_evaluate_leaves_fresh_buffers_zeroed() {
        let net = seeded(&[3, 2, 1]);
        let out = net.evaluate(&[0.2, 0.7, 1.0]).unwrap();

        assert_eq!(out.len(), 1);
        assert!(net.activations().iter().all(|a| a.as_slice().iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn test_evaluate_keeps_last_feed_forward_buffers() {
        let mut net = seeded(&[3, 2, 1]);
        net.feed_forward(&[0.1, 0.2, 0.3]).unwrap();
        let stored = net.activations().to_vec();

        let other = net.evaluate(&[1.0, 0.9, 0.8]).unwrap();
        assert_ne!(other.as_slice(), stored[2].as_slice());
        assert_eq!(net.activations(), stored.as_slice());
    }

    #[test]
    fn test_evaluate_checks_input() {
        let net = seeded(&[2, 1]);
        assert_eq!(
            net.evaluate(&[0.5, 0.5, 0.5]),
            Err(NetError::InputShapeMismatch { expected: 2, actual: 3 })
        );
        assert_eq!(
            net.evaluate(&[0.5, 1.0001]),
            Err(NetError::InputRangeError { index: 1, value: 1.0001 })
        );
    }

    #[test]
    fn test_from_config_seed_is_reproducible() {
        let config = NetworkConfig::new(vec![3, 2, 1]).with_seed(5);
        let a = Network::from_config(&config).unwrap();
        let b = Network::from_config(&config).unwrap();
        assert_eq!(a.layers(), b.layers());
    }
}
