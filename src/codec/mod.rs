pub mod label;

pub use label::{decode, encode};
