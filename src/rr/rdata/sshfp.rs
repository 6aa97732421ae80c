// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! SSHFP records for SSH public key fingerprints

use std::fmt;

use data_encoding::HEXUPPER;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [RFC 4255, Using DNS to Securely Publish Secure Shell (SSH) Key Fingerprints](https://tools.ietf.org/html/rfc4255)
///
/// ```text
/// 3.1.  The SSHFP RDATA Format
///
///    The RDATA for a SSHFP RR consists of an algorithm number, fingerprint
///    type and the fingerprint of the public host key.
/// ```
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SSHFP {
    algorithm: u8,
    fingerprint_type: u8,
    fingerprint: Vec<u8>,
}

impl SSHFP {
    /// Creates a new SSHFP record data.
    pub fn new(algorithm: u8, fingerprint_type: u8, fingerprint: Vec<u8>) -> Self {
        Self {
            algorithm,
            fingerprint_type,
            fingerprint,
        }
    }

    /// The public key algorithm of the key the fingerprint was taken over.
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The message digest algorithm used to calculate the fingerprint.
    pub fn fingerprint_type(&self) -> u8 {
        self.fingerprint_type
    }

    /// The fingerprint of the public key.
    pub fn fingerprint(&self) -> &[u8] {
        &self.fingerprint
    }
}

impl fmt::Display for SSHFP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.algorithm,
            self.fingerprint_type,
            HEXUPPER.encode(&self.fingerprint)
        )
    }
}
