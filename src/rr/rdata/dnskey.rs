// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! public key record data for signing zone records

use std::fmt;

use data_encoding::BASE64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 4034, Resource Records for the DNS Security Extensions, March 2005](https://tools.ietf.org/html/rfc4034#section-2)
///
/// ```text
/// 2.1.  DNSKEY RDATA Wire Format
///
///    The RDATA for a DNSKEY RR consists of a 2 octet Flags Field, a 1
///    octet Protocol Field, a 1 octet Algorithm Field, and the Public Key
///    Field.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DNSKEY {
    flags: u16,
    protocol: u8,
    algorithm: u8,
    public_key: Vec<u8>,
}

impl DNSKEY {
    /// Creates a new DNSKEY record data.
    pub fn new(flags: u16, protocol: u8, algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            flags,
            protocol,
            algorithm,
            public_key,
        }
    }

    /// The key flags; bit 7 is the Zone Key flag, bit 15 the Secure Entry
    /// Point flag of RFC 3757.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// The protocol field, 3 for every current use.
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// The public key's cryptographic algorithm, RFC 4034 appendix A.1.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The public key material.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// True when the Zone Key flag is set.
    pub fn zone_key(&self) -> bool {
        self.flags & 0x0100 != 0
    }

    /// True when the Secure Entry Point flag is set.
    pub fn secure_entry_point(&self) -> bool {
        self.flags & 0x0001 != 0
    }
}

impl fmt::Display for DNSKEY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm,
            BASE64.encode(&self.public_key)
        )
    }
}
