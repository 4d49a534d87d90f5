use thiserror::Error;

#[derive(Debug, Error)]
pub enum BsetError {
    #[error("expected item count must be at least 1 (got {0})")]
    InvalidCapacity(u64),

    #[error("false positive rate must be strictly between 0 and 1 (got {0})")]
    InvalidRate(f64),

    #[error("bit array needs at least 1 bit")]
    InvalidSize,

    #[error("bit index {index} out of range for {size}-bit array")]
    IndexOutOfRange { index: u64, size: u64 },
}

pub type Result<T> = std::result::Result<T, BsetError>;
