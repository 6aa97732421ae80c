// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! resource record implementation

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::dns_class::DNSClass;
use crate::rr::domain::Name;
use crate::rr::record_data::RData;
use crate::rr::record_type::RecordType;

/// A parsed resource record: the common header fields plus typed rdata.
///
/// The record type is never stored separately, it is derived from the
/// rdata variant, which makes a type/rdata mismatch unrepresentable. The
/// `rdlength` of the wire header is likewise a serialization concern and
/// does not exist here.
///
/// Records produced by the zone parser always carry a fully qualified
/// owner name.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Record {
    name: Name,
    dns_class: DNSClass,
    ttl: u32,
    rdata: RData,
}

impl Record {
    /// Creates a record from its parts. The TTL and class default via
    /// [`Record::from_rdata`] in the common case.
    pub fn new(name: Name, dns_class: DNSClass, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            dns_class,
            ttl,
            rdata,
        }
    }

    /// Creates a class IN record with the given owner, ttl and rdata.
    pub fn from_rdata(name: Name, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            dns_class: DNSClass::IN,
            ttl,
            rdata,
        }
    }

    /// The owner name of the record.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The DNS class of the record.
    pub fn dns_class(&self) -> DNSClass {
        self.dns_class
    }

    /// Sets the DNS class.
    pub fn set_dns_class(&mut self, dns_class: DNSClass) -> &mut Self {
        self.dns_class = dns_class;
        self
    }

    /// Time to live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Sets the time to live.
    pub fn set_ttl(&mut self, ttl: u32) -> &mut Self {
        self.ttl = ttl;
        self
    }

    /// The type of the record, derived from the rdata.
    pub fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }

    /// The record data.
    pub fn data(&self) -> &RData {
        &self.rdata
    }

    /// Consumes the record, returning the rdata.
    pub fn into_data(self) -> RData {
        self.rdata
    }
}

impl fmt::Display for Record {
    /// The presentation form of the record, one line of a zone file:
    /// owner, TTL, class and type separated by tabs, then the rdata.
    /// [`crate::serialize::txt::new_rr`] reads this format back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{name}\t{ttl}\t{class}\t{rtype}\t{rdata}",
            name = self.name,
            ttl = self.ttl,
            class = self.dns_class,
            rtype = self.record_type(),
            rdata = self.rdata,
        )
    }
}
