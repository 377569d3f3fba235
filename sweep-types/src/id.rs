use crate::error::Error;
use derive_more::{AsRef, Deref, From, Into};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An event id, the lowercase hex of a 32-byte hash on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRef, Deref, From, Into)]
pub struct Id([u8; 32]);

impl Id {
    pub fn from_bytes(bytes: [u8; 32]) -> Id {
        Id(bytes)
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
    pub fn read_hex(input: &[u8]) -> Result<Id, Error> {
        let mut out: [u8; 32] = [0; 32];
        read_hex!(input, &mut out, 32)?;
        Ok(Id(out))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes: [u8; 64] = [0; 64];
        self.write_hex(&mut bytes).unwrap();
        let hex = unsafe { std::str::from_utf8_unchecked(&bytes) };
        write!(f, "{hex}")
    }
}

impl TryInto<Id> for &[u8] {
    type Error = Error;

    fn try_into(self) -> Result<Id, Self::Error> {
        let array: [u8; 32] = self.try_into()?;
        Ok(Id(array))
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Id, D::Error> {
        let s = String::deserialize(deserializer)?;
        Id::read_hex(s.as_bytes()).map_err(DeError::custom)
    }
}
