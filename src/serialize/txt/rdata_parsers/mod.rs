// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! The per-RR-type rdata readers.
//!
//! Each reader consumes tokens from the shared [`TokenSource`] until it
//! has its fields. Fixed-arity readers take exactly their declared
//! fields and leave the end of the record to be checked here; the
//! variable-tail readers (concatenated base64/hex blobs, type bitmaps,
//! free text) consume up to and including the end of the record
//! themselves.

use std::io::Read;

use crate::rr::domain::Name;
use crate::rr::rdata::{CNAME, NS};
use crate::rr::record_data::RData;
use crate::rr::record_type::RecordType;
use crate::serialize::txt::errors::{ParseErrorKind, ParseResult};
use crate::serialize::txt::zone::TokenSource;

pub(crate) mod a;
pub(crate) mod aaaa;
pub(crate) mod dnskey;
pub(crate) mod ds;
pub(crate) mod mx;
pub(crate) mod name;
pub(crate) mod nsec;
pub(crate) mod nsec3;
pub(crate) mod rrsig;
pub(crate) mod soa;
pub(crate) mod sshfp;
pub(crate) mod txt;
pub(crate) mod unknown;

/// Reads the rdata for `rtype` off the token stream.
pub(crate) fn parse_rdata<R: Read>(
    rtype: RecordType,
    s: &mut TokenSource<'_, R>,
    origin: &Name,
) -> ParseResult<RData> {
    let rdata = match rtype {
        RecordType::A => RData::A(a::parse(s)?),
        RecordType::AAAA => RData::AAAA(aaaa::parse(s)?),
        RecordType::CNAME => RData::CNAME(CNAME(name::parse(s, origin, "bad CNAME target")?)),
        RecordType::NS => RData::NS(NS(name::parse(s, origin, "bad NS nsdname")?)),
        RecordType::MX => RData::MX(mx::parse(s, origin)?),
        RecordType::SOA => RData::SOA(soa::parse(s, origin)?),
        RecordType::SSHFP => RData::SSHFP(sshfp::parse(s)?),
        // these read their own end of record, nothing left to slurp
        RecordType::DNSKEY => return Ok(RData::DNSKEY(dnskey::parse(s)?)),
        RecordType::DS => return Ok(RData::DS(ds::parse(s)?)),
        RecordType::RRSIG => return Ok(RData::RRSIG(rrsig::parse(s, origin)?)),
        RecordType::NSEC => return Ok(RData::NSEC(nsec::parse(s, origin)?)),
        RecordType::NSEC3 => return Ok(RData::NSEC3(nsec3::parse(s, origin)?)),
        RecordType::TXT => return Ok(RData::TXT(txt::parse(s)?)),
        RecordType::Unknown(code) => return unknown::parse(s, code),
        RecordType::OPT => {
            return Err(s.error_here(ParseErrorKind::Message(
                "OPT is a message record, not expressible in a zone file",
            )))
        }
    };
    s.slurp()?;
    Ok(rdata)
}
