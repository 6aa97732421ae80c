// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! record type definitions

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

/// The string was not a known record type mnemonic nor RFC 3597 `TYPE<n>`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown RR type: `{0}'")]
pub struct UnknownRecordType(pub(crate) String);

/// The type of the resource record, determining the shape of its rdata.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) IPv4 address record
    A,
    /// [RFC 3596](https://tools.ietf.org/html/rfc3596) IPv6 address record
    AAAA,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Canonical name record
    CNAME,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) DNS key record
    DNSKEY,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) Delegation signer
    DS,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Mail exchange record
    MX,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Name server record
    NS,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) Next-Secure record
    NSEC,
    /// [RFC 5155](https://tools.ietf.org/html/rfc5155) NSEC record version 3
    NSEC3,
    /// [RFC 6891](https://tools.ietf.org/html/rfc6891) Option
    OPT,
    /// [RFC 4034](https://tools.ietf.org/html/rfc4034) DNSSEC signature
    RRSIG,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Start of a zone of authority record
    SOA,
    /// [RFC 4255](https://tools.ietf.org/html/rfc4255) SSH public key fingerprint
    SSHFP,
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035) Text record
    TXT,
    /// An unknown or unsupported record type, RFC 3597
    Unknown(u16),
}

impl RecordType {
    /// Returns true if this is a DNSSEC record type.
    #[inline]
    pub fn is_dnssec(self) -> bool {
        matches!(
            self,
            Self::DNSKEY | Self::DS | Self::NSEC | Self::NSEC3 | Self::RRSIG
        )
    }

    /// True when the mnemonic (or `TYPE<n>`) is in the known-type table.
    ///
    /// The zone lexer uses this to tell an RR type apart from a plain
    /// string token.
    pub fn is_known(s: &str) -> bool {
        Self::from_str(s).is_ok()
    }
}

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    /// Convert `&str` to `RecordType`, case sensitive per the RFC mnemonics.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use zonefile::RecordType;
    ///
    /// assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
    /// assert_eq!(RecordType::from_str("TYPE1234").unwrap(), RecordType::Unknown(1234));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            "CNAME" => Ok(Self::CNAME),
            "DNSKEY" => Ok(Self::DNSKEY),
            "DS" => Ok(Self::DS),
            "MX" => Ok(Self::MX),
            "NS" => Ok(Self::NS),
            "NSEC" => Ok(Self::NSEC),
            "NSEC3" => Ok(Self::NSEC3),
            "OPT" => Ok(Self::OPT),
            "RRSIG" => Ok(Self::RRSIG),
            "SOA" => Ok(Self::SOA),
            "SSHFP" => Ok(Self::SSHFP),
            "TXT" => Ok(Self::TXT),
            _ => {
                // RFC 3597 generic type name
                if let Some(code) = s.strip_prefix("TYPE") {
                    if let Ok(code) = u16::from_str(code) {
                        return Ok(Self::from(code));
                    }
                }
                Err(UnknownRecordType(s.to_string()))
            }
        }
    }
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::A,
            28 => Self::AAAA,
            5 => Self::CNAME,
            48 => Self::DNSKEY,
            43 => Self::DS,
            15 => Self::MX,
            2 => Self::NS,
            47 => Self::NSEC,
            50 => Self::NSEC3,
            41 => Self::OPT,
            46 => Self::RRSIG,
            6 => Self::SOA,
            44 => Self::SSHFP,
            16 => Self::TXT,
            _ => Self::Unknown(value),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(rt: RecordType) -> Self {
        match rt {
            RecordType::A => 1,
            RecordType::AAAA => 28,
            RecordType::CNAME => 5,
            RecordType::DNSKEY => 48,
            RecordType::DS => 43,
            RecordType::MX => 15,
            RecordType::NS => 2,
            RecordType::NSEC => 47,
            RecordType::NSEC3 => 50,
            RecordType::OPT => 41,
            RecordType::RRSIG => 46,
            RecordType::SOA => 6,
            RecordType::SSHFP => 44,
            RecordType::TXT => 16,
            RecordType::Unknown(code) => code,
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::AAAA => f.write_str("AAAA"),
            Self::CNAME => f.write_str("CNAME"),
            Self::DNSKEY => f.write_str("DNSKEY"),
            Self::DS => f.write_str("DS"),
            Self::MX => f.write_str("MX"),
            Self::NS => f.write_str("NS"),
            Self::NSEC => f.write_str("NSEC"),
            Self::NSEC3 => f.write_str("NSEC3"),
            Self::OPT => f.write_str("OPT"),
            Self::RRSIG => f.write_str("RRSIG"),
            Self::SOA => f.write_str("SOA"),
            Self::SSHFP => f.write_str("SSHFP"),
            Self::TXT => f.write_str("TXT"),
            Self::Unknown(code) => write!(f, "TYPE{code}"),
        }
    }
}
