pub mod dump;
pub mod network;
pub mod neuron;
pub mod spec;

pub use network::Network;
pub use neuron::Neuron;
pub use spec::NetworkSpec;
