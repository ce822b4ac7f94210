//! Fallible buffer allocation.

use crate::error::ResourceError;

/// Creates an empty buffer able to hold `capacity` bytes without reallocating.
pub(crate) fn with_capacity(capacity: usize, purpose: &'static str) -> Result<Vec<u8>, ResourceError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ResourceError {
            requested: capacity,
            purpose,
        })?;
    Ok(buffer)
}

/// Creates a zero filled buffer of `len` bytes.
pub(crate) fn zeroed(len: usize, purpose: &'static str) -> Result<Vec<u8>, ResourceError> {
    let mut buffer = with_capacity(len, purpose)?;
    buffer.resize(len, 0);
    Ok(buffer)
}
