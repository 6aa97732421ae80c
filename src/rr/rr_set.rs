// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! a set of records sharing an owner name, class and type

use std::fmt;
use std::slice::Iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rr::resource::Record;

/// An ordered set of records with identical `(name, class, record type)`.
///
/// RFC 2181 also requires all members of an RRset to share one TTL, but
/// real zones violate that often enough (RRSIGs in particular) that
/// [`RecordSet::push`] tolerates TTL differences; use
/// [`RecordSet::is_rfc2181_compliant`] to check strictly.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the set.
    ///
    /// Returns false, leaving the set unchanged, when the record's name or
    /// class disagrees with the records already present. The record type is
    /// part of the set key as well, but a same-name same-class set mixing
    /// types is a caller bug this mirror of the classic `RRset.Push`
    /// tolerates, exactly like differing TTLs.
    pub fn push(&mut self, record: Record) -> bool {
        if let Some(first) = self.records.first() {
            if first.name() != record.name() || first.dns_class() != record.dns_class() {
                return false;
            }
        }
        self.records.push(record);
        true
    }

    /// Removes and returns the most recently pushed record.
    pub fn pop(&mut self) -> Option<Record> {
        self.records.pop()
    }

    /// Strict RFC 2181 section 5 check: every member agrees on name,
    /// class and TTL.
    pub fn is_rfc2181_compliant(&self) -> bool {
        let Some(first) = self.records.first() else {
            return true;
        };
        self.records.iter().skip(1).all(|r| {
            r.ttl() == first.ttl()
                && r.name() == first.name()
                && r.dns_class() == first.dns_class()
        })
    }

    /// The records in insertion order.
    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    /// The number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for RecordSet {
    /// Presentation form of the whole set, one record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
