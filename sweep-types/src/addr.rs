use crate::{Error, InnerError, Kind, Pubkey};
use std::fmt;

/// An event address, e.g. used in an 'a' tag with 'kind:author:d' format.
///
/// Two events sharing an address are the same logical resource; the relay
/// keeps the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Addr {
    /// The kind of the replaceable event
    pub kind: Kind,

    /// The author of the replaceable event
    pub author: Pubkey,

    /// The identifier, the value of the event's own 'd' tag
    pub identifier: String,
}

impl Addr {
    /// Serialize to the 'a' tag value format, `kind:author:identifier`
    pub fn to_tag_value(&self) -> String {
        format!("{}", self)
    }

    /// Parse from the 'a' tag value format
    pub fn from_tag_value(input: &str) -> Result<Addr, Error> {
        let mut iter = input.splitn(3, ':');
        if let (Some(kind_str), Some(author_str), Some(identifier)) =
            (iter.next(), iter.next(), iter.next())
        {
            if let Ok(kind) = kind_str.parse::<u16>() {
                let author = Pubkey::read_hex(author_str.as_bytes())?;
                return Ok(Addr {
                    kind: Kind::new(kind),
                    author,
                    identifier: identifier.to_owned(),
                });
            }
        }
        Err(InnerError::InvalidAddr.into())
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.author, self.identifier)
    }
}

#[cfg(test)]
mod test {
    use super::Addr;
    use crate::{Kind, Pubkey};

    fn pubkey() -> Pubkey {
        Pubkey::read_hex(b"1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d")
            .unwrap()
    }

    #[test]
    fn test_addr_tag_value_roundtrip() {
        let addr = Addr {
            kind: Kind::new(31923),
            author: pubkey(),
            identifier: "event-1717171717171".to_owned(),
        };
        let value = addr.to_tag_value();
        assert_eq!(
            value,
            "31923:1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d:event-1717171717171"
        );
        assert_eq!(Addr::from_tag_value(&value).unwrap(), addr);
    }

    #[test]
    fn test_addr_identifier_may_contain_colons() {
        let value =
            "30023:1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d:a:b:c";
        let addr = Addr::from_tag_value(value).unwrap();
        assert_eq!(addr.identifier, "a:b:c");
        assert_eq!(addr.to_tag_value(), value);
    }

    #[test]
    fn test_addr_rejects_malformed() {
        assert!(Addr::from_tag_value("").is_err());
        assert!(Addr::from_tag_value("30023").is_err());
        assert!(Addr::from_tag_value("30023:deadbeef:d").is_err());
        assert!(Addr::from_tag_value("notakind:1110ee4ff957fa9c55832eaccb4dc1c45bfc6304e1e4e9fa478f53df4b20062d:d").is_err());
    }
}
