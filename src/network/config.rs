use serde::{Serialize, Deserialize};

/// Topology and initialization settings for a [`Network`](super::Network).
///
/// Only the architecture and the seed are stored; weights are always drawn
/// fresh when a network is built from a config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Layer widths, input layer first, output layer last.
    pub sizes: Vec<usize>,
    /// Seeds the weight/bias generator. `None` draws from OS entropy, so
    /// every build differs.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(sizes: Vec<usize>) -> Self {
        NetworkConfig { sizes, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// The reference `[6, 3, 3, 1]` topology, unseeded.
impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(vec![6, 3, 3, 1])
    }
}
