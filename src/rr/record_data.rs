// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! record data enum variants

use std::fmt;

use enum_as_inner::EnumAsInner;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::rdata::{
    A, AAAA, CNAME, DNSKEY, DS, MX, NS, NSEC, NSEC3, NULL, OPT, RRSIG, SOA, SSHFP, TXT,
};
use crate::rr::record_type::RecordType;

/// Record data, the closed set of rdata variants this crate understands
/// plus the RFC 3597 fallback for everything else.
///
/// The `EnumAsInner` accessors (`as_rrsig()`, `as_dnskey()`, ...) are the
/// variant discrimination surface used by DNSSEC consumers.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, EnumAsInner, PartialEq, Eq, Hash, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub enum RData {
    /// IPv4 address
    A(A),
    /// IPv6 address
    AAAA(AAAA),
    /// Canonical name
    CNAME(CNAME),
    /// Public key for DNSSEC
    DNSKEY(DNSKEY),
    /// Delegation signer
    DS(DS),
    /// Mail exchange
    MX(MX),
    /// Authoritative name server
    NS(NS),
    /// Denial of existence
    NSEC(NSEC),
    /// Hashed denial of existence
    NSEC3(NSEC3),
    /// EDNS options, messages only
    OPT(OPT),
    /// RRset signature
    RRSIG(RRSIG),
    /// Start of authority
    SOA(SOA),
    /// SSH key fingerprint
    SSHFP(SSHFP),
    /// Descriptive text
    TXT(TXT),
    /// Record with an unknown type, carried as raw bytes per RFC 3597
    Unknown {
        /// The type code of the record
        code: u16,
        /// The opaque rdata
        rdata: NULL,
    },
}

impl RData {
    /// The record type matching this record data.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(..) => RecordType::A,
            Self::AAAA(..) => RecordType::AAAA,
            Self::CNAME(..) => RecordType::CNAME,
            Self::DNSKEY(..) => RecordType::DNSKEY,
            Self::DS(..) => RecordType::DS,
            Self::MX(..) => RecordType::MX,
            Self::NS(..) => RecordType::NS,
            Self::NSEC(..) => RecordType::NSEC,
            Self::NSEC3(..) => RecordType::NSEC3,
            Self::OPT(..) => RecordType::OPT,
            Self::RRSIG(..) => RecordType::RRSIG,
            Self::SOA(..) => RecordType::SOA,
            Self::SSHFP(..) => RecordType::SSHFP,
            Self::TXT(..) => RecordType::TXT,
            Self::Unknown { code, .. } => RecordType::Unknown(*code),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(rdata) => rdata.fmt(f),
            Self::AAAA(rdata) => rdata.fmt(f),
            Self::CNAME(rdata) => rdata.fmt(f),
            Self::DNSKEY(rdata) => rdata.fmt(f),
            Self::DS(rdata) => rdata.fmt(f),
            Self::MX(rdata) => rdata.fmt(f),
            Self::NS(rdata) => rdata.fmt(f),
            Self::NSEC(rdata) => rdata.fmt(f),
            Self::NSEC3(rdata) => rdata.fmt(f),
            Self::OPT(rdata) => rdata.fmt(f),
            Self::RRSIG(rdata) => rdata.fmt(f),
            Self::SOA(rdata) => rdata.fmt(f),
            Self::SSHFP(rdata) => rdata.fmt(f),
            Self::TXT(rdata) => rdata.fmt(f),
            Self::Unknown { rdata, .. } => rdata.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::rr::domain::Name;

    #[test]
    fn record_type_mapping() {
        let rdata = RData::MX(MX::new(10, Name::from_str("mx.miek.nl.").unwrap()));
        assert_eq!(rdata.record_type(), RecordType::MX);
        assert!(rdata.as_mx().is_some());
        assert!(rdata.as_soa().is_none());

        let rdata = RData::Unknown {
            code: 1234,
            rdata: NULL::with(vec![0xde, 0xad]),
        };
        assert_eq!(rdata.record_type(), RecordType::Unknown(1234));
    }

    #[test]
    fn display_delegates() {
        let rdata = RData::A(A::new(127, 0, 0, 1));
        assert_eq!(rdata.to_string(), "127.0.0.1");

        let rdata = RData::Unknown {
            code: 1234,
            rdata: NULL::with(vec![0xde, 0xad]),
        };
        assert_eq!(rdata.to_string(), "\\# 2 DEAD");
    }
}
