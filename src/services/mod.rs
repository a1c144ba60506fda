// Service exports
pub mod dataset;

pub use dataset::{NeighborhoodDataset, DatasetError};
