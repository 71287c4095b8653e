// Reference driver: builds a network, runs one forward pass, prints the output.
// Usage:
//   cargo run                       # [6, 3, 3, 1], unseeded
//   cargo run -- path/config.json   # topology and seed from a NetworkConfig file
// Set RUST_LOG=trace to see each layer's weights and inputs.
use ferrite_ff::{Network, NetworkConfig};
use tracing::info;

const INPUT: [f64; 6] = [0.9, 0.8, 0.6, 0.3, 0.1, 0.1];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => NetworkConfig::load_json(&path)?,
        None => NetworkConfig::default(),
    };
    info!(sizes = ?config.sizes, seed = ?config.seed, "building network");

    let mut network = Network::from_config(&config)?;

    // A config may describe a different input width; repeat or cut the
    // reference input to fit.
    let input: Vec<f64> = INPUT.iter().copied().cycle().take(network.sizes()[0]).collect();
    let result = network.feed_forward(&input)?;

    println!("Result:\n{result:?}");
    Ok(())
}
