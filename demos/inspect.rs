use ferrite_ff::{Network, NetworkConfig};

fn main() {
    let config = NetworkConfig::new(vec![4, 3, 2]).with_seed(7);
    let mut network = Network::from_config(&config).expect("valid topology");

    for (i, layer) in network.layers().iter().enumerate() {
        println!("Layer {} weights:\n{}", i + 1, layer.weights());
        println!("Layer {} biases:\n{}", i + 1, layer.biases());
    }

    let input = [0.0, 0.25, 0.75, 1.0];
    let output = network.feed_forward(&input).expect("input fits the input layer");

    for (i, activation) in network.activations().iter().enumerate() {
        println!("Activations {i}:\n{activation}");
    }
    println!("Output: {output:?}");
}
