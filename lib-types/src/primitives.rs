//! Canonical Primitive Types for Token Ledger States
//!
//! Rule: No String identifiers in ledger state. Ever.
//!
//! These types are the foundational building blocks for every ledger record.
//! They are designed to be:
//! - Fixed-size (no dynamic allocation)
//! - Cheap to copy, compare and hash
//! - Opaque: nothing in the verifier inspects their contents

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::IdentityParseError;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Token quantity held by a state.
///
/// Signed so that malformed proposals (negative amounts) can be represented
/// and rejected instead of silently wrapping.
pub type Quantity = i64;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Byte length of a [`PartyId`]
pub const PARTY_ID_LEN: usize = 32;

/// 32-byte party handle (derived from public key material)
///
/// The all-zero handle is reserved and means "no party".
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Default)]
pub struct PartyId(pub [u8; PARTY_ID_LEN]);

impl PartyId {
    /// Create a new PartyId from raw bytes
    pub const fn new(bytes: [u8; PARTY_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create the zeroed (absent) PartyId
    pub const fn zero() -> Self {
        Self([0u8; PARTY_ID_LEN])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; PARTY_ID_LEN] {
        &self.0
    }

    /// Check if this is the zero (absent) handle
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; PARTY_ID_LEN]
    }

    /// Derive a handle from public key material.
    ///
    /// Only the digest is taken here; the key is never validated and no
    /// signature logic lives at this layer.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        Self(*blake3::hash(public_key).as_bytes())
    }
}

impl fmt::Debug for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; PARTY_ID_LEN]> for PartyId {
    fn from(bytes: [u8; PARTY_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for PartyId {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|e| IdentityParseError::InvalidHex(e.to_string()))?;
        if bytes.len() != PARTY_ID_LEN {
            return Err(IdentityParseError::InvalidLength {
                expected: PARTY_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PARTY_ID_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for PartyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for PartyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
