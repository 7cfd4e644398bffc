pub mod csv;
pub mod dataset;

pub use csv::{parse_csv, RawTable};
pub use dataset::Dataset;
