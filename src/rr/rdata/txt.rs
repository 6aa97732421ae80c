// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! text records for storing arbitrary data

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The TXT record type, descriptive text.
///
/// The text is kept in presentation form: escapes stay verbatim, so the
/// value prints back exactly as written in the zone file.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TXT {
    txt_data: String,
}

impl TXT {
    /// Creates a new TXT record data.
    pub fn new(txt_data: String) -> Self {
        Self { txt_data }
    }

    /// The text of the record.
    pub fn txt_data(&self) -> &str {
        &self.txt_data
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.txt_data)
    }
}
