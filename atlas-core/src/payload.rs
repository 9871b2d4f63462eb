//! Request payload encoding.
//!
//! Payloads are taken by reference, so a caller can never hand over a stale
//! copy of a value that is still being modified elsewhere.

use serde::Serialize;

use crate::error::{Error, Result};

/// Encode a request payload as JSON.
///
/// Fails with [`Error::NilPayload`] when the value serializes to `null`
/// (for example a `None` optional payload), and with [`Error::Encode`] when
/// serialization itself fails.
pub fn to_payload<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
  let bytes = serde_json::to_vec(payload).map_err(Error::Encode)?;
  if bytes == b"null" {
    return Err(Error::NilPayload);
  }
  Ok(bytes)
}
