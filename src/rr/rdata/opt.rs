// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! option record for EDNS

use std::fmt;

use data_encoding::HEXUPPER;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 6891, Extension Mechanisms for DNS (EDNS(0)), April 2013](https://tools.ietf.org/html/rfc6891#section-6)
///
/// OPT is a meta record: it belongs to messages, not zones, so it has no
/// presentation format and the zone parser rejects it. It is carried in
/// the data model so consumers such as a DNSSEC verifier can discriminate
/// it when walking message-shaped record collections.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct OPT {
    options: Vec<(u16, Vec<u8>)>,
}

impl OPT {
    /// Creates a new OPT record data from `(option-code, option-data)` pairs.
    pub fn new(options: Vec<(u16, Vec<u8>)>) -> Self {
        Self { options }
    }

    /// The EDNS options as `(option-code, option-data)` pairs.
    pub fn options(&self) -> &[(u16, Vec<u8>)] {
        &self.options
    }
}

impl fmt::Display for OPT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (code, data) in &self.options {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{code}:{}", HEXUPPER.encode(data))?;
            first = false;
        }
        Ok(())
    }
}
