pub mod bitarray;
pub mod bloom;
pub mod errors;
pub mod params;

pub use bitarray::BitArray;
pub use bloom::BloomFilter;
pub use errors::{BsetError, Result};
