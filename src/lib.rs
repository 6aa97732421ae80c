// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A streaming lexer and parser for RFC 1035 zone files, also known as
//! master files.
//!
//! Resource records are native types, not wire format. The usual way in is
//! one of the three entry points in [`serialize::txt`]:
//!
//! ```
//! use zonefile::{new_rr, RecordType};
//!
//! let rr = new_rr("miek.nl. 3600 IN MX 10 mx.miek.nl.").unwrap();
//! assert_eq!(rr.record_type(), RecordType::MX);
//! ```
//!
//! Whole zones are parsed as a stream; records come out in source order and
//! the first error ends the stream:
//!
//! ```
//! use zonefile::parse_zone;
//!
//! let zone = "$ORIGIN example.org.\n$TTL 300\nwww IN A 10.0.0.1\n";
//! for record in parse_zone(zone.as_bytes(), "db.example.org") {
//!     let record = record.unwrap();
//!     assert_eq!(record.name().to_string(), "www.example.org.");
//!     assert_eq!(record.ttl(), 300);
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod rr;
pub mod serialize;

pub use crate::rr::{DNSClass, Name, RData, Record, RecordSet, RecordType};
pub use crate::serialize::txt::{
    new_rr, parse_zone, read_rr, ParseError, ParseErrorKind, ParseResult, ZoneParser,
};

/// TTL used for records that neither carry one nor follow a `$TTL` directive.
pub const DEFAULT_TTL: u32 = 3600;

/// Per RFC 2181 section 8 a TTL is an unsigned 31 bit quantity.
pub const MAX_TTL: u32 = (1 << 31) - 1;

/// How deep `$INCLUDE` files may nest before the parse is aborted.
pub const MAX_INCLUDE_DEPTH: usize = 7;
