// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! hashed negative cache proof for non-existence

use std::fmt;

use data_encoding::{BASE32_DNSSEC, HEXUPPER};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::record_type::RecordType;

/// [RFC 5155, DNS Security (DNSSEC) Hashed Authenticated Denial of Existence, March 2008](https://tools.ietf.org/html/rfc5155#section-3)
///
/// ```text
/// 3.1.  RDATA Fields
///
///    Hash Algorithm, Flags, Iterations, Salt Length, Salt, Hash Length,
///    Next Hashed Owner Name, Type Bit Maps
/// ```
///
/// In presentation form the salt is hex, `-` when empty, and the next
/// hashed owner name is unpadded base32hex.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NSEC3 {
    hash_algorithm: u8,
    flags: u8,
    iterations: u16,
    salt: Vec<u8>,
    next_hashed_owner_name: Vec<u8>,
    type_bit_maps: Vec<RecordType>,
}

impl NSEC3 {
    /// Creates a new NSEC3 record data.
    pub fn new(
        hash_algorithm: u8,
        flags: u8,
        iterations: u16,
        salt: Vec<u8>,
        next_hashed_owner_name: Vec<u8>,
        type_bit_maps: Vec<RecordType>,
    ) -> Self {
        Self {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_hashed_owner_name,
            type_bit_maps,
        }
    }

    /// The hash used for the owner names in the chain, 1 is SHA-1.
    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// The flags field; bit 0 is Opt-Out.
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// True when the Opt-Out flag is set.
    pub fn opt_out(&self) -> bool {
        self.flags & 0x01 != 0
    }

    /// How many additional times the hash function was applied.
    pub fn iterations(&self) -> u16 {
        self.iterations
    }

    /// The salt appended to the owner name before hashing.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// The hash of the next owner name in hash order.
    pub fn next_hashed_owner_name(&self) -> &[u8] {
        &self.next_hashed_owner_name
    }

    /// The RR types present at the original owner name.
    pub fn type_bit_maps(&self) -> &[RecordType] {
        &self.type_bit_maps
    }
}

impl fmt::Display for NSEC3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.hash_algorithm, self.flags, self.iterations)?;
        if self.salt.is_empty() {
            f.write_str("-")?;
        } else {
            f.write_str(&HEXUPPER.encode(&self.salt))?;
        }
        write!(f, " {}", BASE32_DNSSEC.encode(&self.next_hashed_owner_name))?;
        for rt in &self.type_bit_maps {
            write!(f, " {rt}")?;
        }
        Ok(())
    }
}
