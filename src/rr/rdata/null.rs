// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! opaque rdata, used for record types without a known structure

use std::fmt;

use data_encoding::HEXUPPER;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Untyped rdata bytes. This is what an RFC 3597 unknown-type record
/// carries; the presentation format is `\# <length> <hex>`.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct NULL {
    anything: Vec<u8>,
}

impl NULL {
    /// Construct a new NULL rdata with the given bytes.
    pub fn with(anything: Vec<u8>) -> Self {
        Self { anything }
    }

    /// The raw rdata bytes.
    pub fn anything(&self) -> &[u8] {
        &self.anything
    }
}

impl fmt::Display for NULL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\\# {} {}",
            self.anything.len(),
            HEXUPPER.encode(&self.anything)
        )
    }
}
