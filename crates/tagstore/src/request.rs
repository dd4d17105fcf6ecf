//! Write request presented to the tag store.
//!
//! This module defines the borrowed view of an incoming write that the store
//! operates on. It is used for the following:
//! 1. **Validation:** Rejecting payloads too short for the encode window.
//! 2. **Window Packing:** Caching the packed 64-bit encode window so the
//!    distance and encoding paths never re-derive it.

use crate::common::{Address, PAYLOAD_BYTES, TagStoreError};
use crate::wear::distance::pack_word;

/// An incoming write: address, payload, and security domain.
///
/// The payload is borrowed from the caller and must cover at least the
/// encode window. Only the window (the first 8 bytes) participates in
/// distance and transition tracking and lands in the block payload on a
/// fill; trailing bytes are accepted and ignored.
#[derive(Clone, Copy, Debug)]
pub struct WriteRequest<'a> {
    addr: Address,
    data: &'a [u8],
    secure: bool,
    word: u64,
}

impl<'a> WriteRequest<'a> {
    /// Creates a write request, packing the encode window up front.
    ///
    /// # Errors
    ///
    /// Returns [`TagStoreError::PayloadTooShort`] when `data` has fewer than
    /// [`PAYLOAD_BYTES`] bytes.
    pub fn new(addr: Address, data: &'a [u8], secure: bool) -> Result<Self, TagStoreError> {
        if data.len() < PAYLOAD_BYTES {
            return Err(TagStoreError::PayloadTooShort { len: data.len() });
        }
        Ok(Self {
            addr,
            data,
            secure,
            word: pack_word(data),
        })
    }

    /// Returns the target address.
    #[inline]
    pub const fn addr(&self) -> Address {
        self.addr
    }

    /// Returns the full payload slice.
    #[inline]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns whether the write belongs to the secure domain.
    #[inline]
    pub const fn secure(&self) -> bool {
        self.secure
    }

    /// Returns the packed 64-bit encode window (byte 0 least significant).
    #[inline]
    pub const fn window_word(&self) -> u64 {
        self.word
    }

    /// Returns the encode window as an owned byte array.
    #[inline]
    pub fn window_bytes(&self) -> [u8; PAYLOAD_BYTES] {
        self.word.to_le_bytes()
    }
}
