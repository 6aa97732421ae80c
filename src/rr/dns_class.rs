// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! class of DNS operations, in general always IN for internet

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

/// The string was not a known class mnemonic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown class: `{0}'")]
pub struct UnknownDNSClass(pub(crate) String);

/// The DNS class of a record. Zone semantics are only defined for `IN`;
/// the parser accepts the other mnemonics syntactically.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub enum DNSClass {
    /// Internet
    #[default]
    IN,
    /// Chaos
    CH,
    /// Hesiod
    HS,
    /// QCLASS NONE, RFC 2136
    NONE,
    /// QCLASS * (ANY), RFC 1035
    ANY,
}

impl DNSClass {
    /// True when the mnemonic is in the known-class table; used by the
    /// zone lexer to classify tokens.
    pub fn is_known(s: &str) -> bool {
        Self::from_str(s).is_ok()
    }
}

impl FromStr for DNSClass {
    type Err = UnknownDNSClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN" => Ok(Self::IN),
            "CH" => Ok(Self::CH),
            "HS" => Ok(Self::HS),
            "NONE" => Ok(Self::NONE),
            "ANY" => Ok(Self::ANY),
            _ => Err(UnknownDNSClass(s.to_string())),
        }
    }
}

impl From<DNSClass> for u16 {
    fn from(class: DNSClass) -> Self {
        match class {
            DNSClass::IN => 1,
            DNSClass::CH => 3,
            DNSClass::HS => 4,
            DNSClass::NONE => 254,
            DNSClass::ANY => 255,
        }
    }
}

impl Display for DNSClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::IN => "IN",
            Self::CH => "CH",
            Self::HS => "HS",
            Self::NONE => "NONE",
            Self::ANY => "ANY",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(DNSClass::from_str("IN").unwrap(), DNSClass::IN);
        assert_eq!(DNSClass::from_str("CH").unwrap(), DNSClass::CH);
        assert!(DNSClass::from_str("XX").is_err());
        assert_eq!(u16::from(DNSClass::IN), 1);
        assert_eq!(DNSClass::default(), DNSClass::IN);
    }
}
