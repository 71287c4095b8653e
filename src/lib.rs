pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use math::vector::Vector;
pub use activation::sigmoid::sigmoid;
pub use layers::dense::DenseLayer;
pub use network::network::Network;
pub use network::config::NetworkConfig;
