use crate::error::Error;
use derive_more::{AsRef, Deref, From, Into};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An author identifier, the lowercase hex of a 32-byte public key on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, Deref, From, Into)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub fn from_bytes(bytes: [u8; 32]) -> Pubkey {
        Pubkey(bytes)
    }

    /// Write to output buffer in lowercase hex format
    pub fn write_hex(&self, output: &mut [u8]) -> Result<(), Error> {
        write_hex!(self.0, output, 32)
    }

    /// Write to a hex String (allocates)
    pub fn as_hex_string(&self) -> String {
        format!("{self}")
    }

    /// Read from input buffer in lowercase hex format
    pub fn read_hex(input: &[u8]) -> Result<Pubkey, Error> {
        let mut out: [u8; 32] = [0; 32];
        read_hex!(input, &mut out, 32)?;
        Ok(Pubkey(out))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes: [u8; 64] = [0; 64];
        self.write_hex(&mut bytes).unwrap();
        let hex = unsafe { std::str::from_utf8_unchecked(&bytes) };
        write!(f, "{hex}")
    }
}

impl TryInto<Pubkey> for &[u8] {
    type Error = Error;

    fn try_into(self) -> Result<Pubkey, Self::Error> {
        let array: [u8; 32] = self.try_into()?;
        Ok(Pubkey(array))
    }
}

impl Serialize for Pubkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pubkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::read_hex(s.as_bytes()).map_err(DeError::custom)
    }
}
