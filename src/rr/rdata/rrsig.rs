// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! RRSIG record data, the signature over an RRset

use std::fmt;

use data_encoding::BASE64;
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::domain::Name;
use crate::rr::record_type::RecordType;

/// RFC 4034 section 3.2: signature expiration and inception appear either
/// as `YYYYMMDDHHmmSS` in UTC or as a plain count of seconds since the
/// epoch.
pub(crate) const SERIAL_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]");

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-3)
///
/// ```text
/// 3.1.  RRSIG RDATA Wire Format
///
///    The RDATA for an RRSIG RR consists of a 2 octet Type Covered field, a
///    1 octet Algorithm field, a 1 octet Labels field, a 4 octet Original
///    TTL field, a 4 octet Signature Expiration field, a 4 octet Signature
///    Inception field, a 2 octet Key tag, the Signer's Name field, and the
///    Signature field.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct RRSIG {
    type_covered: RecordType,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    sig_expiration: u32,
    sig_inception: u32,
    key_tag: u16,
    signer_name: Name,
    sig: Vec<u8>,
}

impl RRSIG {
    /// Creates a new RRSIG record data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: RecordType,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        sig_expiration: u32,
        sig_inception: u32,
        key_tag: u16,
        signer_name: Name,
        sig: Vec<u8>,
    ) -> Self {
        Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            sig_expiration,
            sig_inception,
            key_tag,
            signer_name,
            sig,
        }
    }

    /// The type of the RRset covered by this signature.
    pub fn type_covered(&self) -> RecordType {
        self.type_covered
    }

    /// The cryptographic algorithm used to create the signature.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The number of labels in the original RRSIG RR owner name.
    pub fn labels(&self) -> u8 {
        self.labels
    }

    /// The TTL of the covered RRset as it appears in the authoritative zone.
    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// Seconds since the epoch, serial arithmetic, after which the
    /// signature is no longer valid.
    pub fn sig_expiration(&self) -> u32 {
        self.sig_expiration
    }

    /// Seconds since the epoch, serial arithmetic, before which the
    /// signature is not yet valid.
    pub fn sig_inception(&self) -> u32 {
        self.sig_inception
    }

    /// The key tag of the DNSKEY that validates this signature.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// The owner of the DNSKEY that validates this signature.
    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    /// The cryptographic signature.
    pub fn sig(&self) -> &[u8] {
        &self.sig
    }
}

fn fmt_serial_time(f: &mut fmt::Formatter<'_>, epoch: u32) -> fmt::Result {
    let formatted = OffsetDateTime::from_unix_timestamp(i64::from(epoch))
        .ok()
        .and_then(|t| t.format(SERIAL_TIME).ok())
        .ok_or(fmt::Error)?;
    f.write_str(&formatted)
}

impl fmt::Display for RRSIG {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ",
            self.type_covered, self.algorithm, self.labels, self.original_ttl,
        )?;
        fmt_serial_time(f, self.sig_expiration)?;
        f.write_str(" ")?;
        fmt_serial_time(f, self.sig_inception)?;
        write!(
            f,
            " {} {} {}",
            self.key_tag,
            self.signer_name,
            BASE64.encode(&self.sig)
        )
    }
}
