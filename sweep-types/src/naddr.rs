//! The shareable bech32 address format (NIP-19 `naddr`) used in page URLs.

use crate::{Addr, Error, InnerError, Kind, Pubkey};
use bech32::{Bech32, Hrp};

const NADDR_HRP: &str = "naddr";

// TLV types within the bech32 data
const TLV_SPECIAL: u8 = 0; // the 'd' identifier, UTF-8
const TLV_RELAY: u8 = 1; // relay hint; not carried
const TLV_AUTHOR: u8 = 2; // 32 byte pubkey
const TLV_KIND: u8 = 3; // u32 big-endian

impl Addr {
    /// Encode as a shareable `naddr1...` string, suitable for a URL path segment
    pub fn to_naddr(&self) -> Result<String, Error> {
        let identifier = self.identifier.as_bytes();
        if identifier.len() > 255 {
            return Err(InnerError::InvalidAddr.into());
        }
        let mut tlv: Vec<u8> = Vec::with_capacity(identifier.len() + 44);
        tlv.push(TLV_SPECIAL);
        tlv.push(identifier.len() as u8);
        tlv.extend_from_slice(identifier);
        tlv.push(TLV_AUTHOR);
        tlv.push(32);
        tlv.extend_from_slice(self.author.as_slice());
        tlv.push(TLV_KIND);
        tlv.push(4);
        tlv.extend_from_slice(&u32::from(self.kind.as_u16()).to_be_bytes());

        let hrp = match Hrp::parse(NADDR_HRP) {
            Ok(hrp) => hrp,
            Err(e) => return Err(InnerError::Bech32(e.to_string()).into()),
        };
        match bech32::encode::<Bech32>(hrp, &tlv) {
            Ok(s) => Ok(s),
            Err(e) => Err(InnerError::Bech32(e.to_string()).into()),
        }
    }

    /// Decode an `naddr1...` string.
    ///
    /// Anything that is not a well-formed naddr is an `Err`, including other
    /// bech32 entities such as `npub1...`. Callers treat the error as
    /// "resource not found", so nothing here panics on untrusted input.
    pub fn from_naddr(s: &str) -> Result<Addr, Error> {
        let (hrp, data) = match bech32::decode(s) {
            Ok(decoded) => decoded,
            Err(e) => return Err(InnerError::Bech32(e.to_string()).into()),
        };
        if hrp.as_str() != NADDR_HRP {
            return Err(InnerError::WrongBech32Hrp.into());
        }

        let mut identifier: Option<String> = None;
        let mut author: Option<Pubkey> = None;
        let mut kind: Option<Kind> = None;

        let mut pos: usize = 0;
        while pos < data.len() {
            if pos + 2 > data.len() {
                return Err(InnerError::EndOfInput.into());
            }
            let typ = data[pos];
            let len = data[pos + 1] as usize;
            pos += 2;
            if pos + len > data.len() {
                return Err(InnerError::EndOfInput.into());
            }
            let value = &data[pos..pos + len];
            pos += len;
            match typ {
                TLV_SPECIAL => {
                    if identifier.is_none() {
                        identifier = Some(String::from_utf8(value.to_owned())?);
                    }
                }
                TLV_AUTHOR => {
                    if author.is_none() {
                        author = Some(value.try_into()?);
                    }
                }
                TLV_KIND => {
                    if kind.is_none() {
                        let array: [u8; 4] = value.try_into()?;
                        let k = u32::from_be_bytes(array);
                        if k > u32::from(u16::MAX) {
                            return Err(InnerError::InvalidNaddr.into());
                        }
                        kind = Some(Kind::new(k as u16));
                    }
                }
                TLV_RELAY => {} // relay hints are not carried
                _ => {}         // readers must skip unknown TLV types
            }
        }

        match (identifier, author, kind) {
            (Some(identifier), Some(author), Some(kind)) => Ok(Addr {
                kind,
                author,
                identifier,
            }),
            _ => Err(InnerError::InvalidNaddr.into()),
        }
    }
}
