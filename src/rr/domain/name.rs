// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! domain name, aka labels
//!
//! The presentation text of each label is kept verbatim, escapes included,
//! so that a parsed name prints back exactly as it was written. Comparison
//! and hashing are ASCII-case-insensitive per RFC 1035 section 2.3.3.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

/// The name was not acceptable domain name syntax.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("bad domain name: `{0}'")]
pub struct NameError(pub(crate) String);

/// A domain name, label by label.
///
/// A name whose text ends in an (unescaped) dot is fully qualified; any
/// other name is relative and is completed against an origin, either at
/// parse time or later with [`Name::append_name`].
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default, Eq)]
pub struct Name {
    labels: Vec<String>,
    is_fqdn: bool,
}

impl Name {
    /// The root name, `.`
    pub fn root() -> Self {
        Self {
            labels: Vec::new(),
            is_fqdn: true,
        }
    }

    /// Parse `name`, qualifying it against `origin` when it is relative.
    ///
    /// Validation follows RFC 1035 and RFC 3696: labels of 1 to 63 octets,
    /// at most 255 octets overall, letters, digits, `-` (not directly after
    /// a dot), `_` and `*` allowed, and at least one non-numeric character
    /// somewhere in the name. A backslash escapes the next character, which
    /// keeps an escaped dot inside its label.
    pub fn parse(name: &str, origin: Option<&Self>) -> Result<Self, NameError> {
        if name == "." {
            return Ok(Self::root());
        }
        if name.is_empty() || name.len() > 255 {
            return Err(NameError(name.to_string()));
        }

        let mut labels = Vec::new();
        let mut label = String::new();
        let mut seen_letter = false;
        let mut escaped = false;
        let mut last = b'.';

        for c in name.chars() {
            if escaped {
                label.push(c);
                escaped = false;
                last = 0; // anything but '.' or '-'
                continue;
            }
            match c {
                '\\' => {
                    label.push(c);
                    escaped = true;
                }
                'a'..='z' | 'A'..='Z' | '_' | '*' => {
                    seen_letter = true;
                    label.push(c);
                    last = b'a';
                }
                '0'..='9' => {
                    label.push(c);
                    last = b'0';
                }
                '-' => {
                    // a dash may not open a label
                    if last == b'.' {
                        return Err(NameError(name.to_string()));
                    }
                    label.push(c);
                    last = b'-';
                }
                '.' => {
                    if last == b'.' || last == b'-' {
                        return Err(NameError(name.to_string()));
                    }
                    if label.len() > 63 {
                        return Err(NameError(name.to_string()));
                    }
                    labels.push(std::mem::take(&mut label));
                    last = b'.';
                }
                _ => return Err(NameError(name.to_string())),
            }
        }

        if escaped {
            // dangling backslash
            return Err(NameError(name.to_string()));
        }
        if !seen_letter {
            return Err(NameError(name.to_string()));
        }

        let mut this = if label.is_empty() {
            Self {
                labels,
                is_fqdn: true,
            }
        } else {
            if label.len() > 63 {
                return Err(NameError(name.to_string()));
            }
            labels.push(label);
            Self {
                labels,
                is_fqdn: false,
            }
        };

        if !this.is_fqdn {
            if let Some(origin) = origin {
                this = this.append_name(origin);
            }
        }
        Ok(this)
    }

    /// Whether the name ends in a dot.
    pub fn is_fqdn(&self) -> bool {
        self.is_fqdn
    }

    /// Whether this is the root name, `.`
    pub fn is_root(&self) -> bool {
        self.labels.is_empty() && self.is_fqdn
    }

    /// The number of labels, not counting the root.
    pub fn num_labels(&self) -> u8 {
        self.labels.len() as u8
    }

    /// The labels in presentation form.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Appends `other`, e.g. `www` + `example.org.` = `www.example.org.`
    ///
    /// The result is fully qualified iff `other` is.
    pub fn append_name(&self, other: &Self) -> Self {
        let mut labels = self.labels.clone();
        labels.extend(other.labels.iter().cloned());
        Self {
            labels,
            is_fqdn: other.is_fqdn,
        }
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_char('.');
        }
        let mut first = true;
        for label in &self.labels {
            if !first {
                f.write_char('.')?;
            }
            f.write_str(label)?;
            first = false;
        }
        if self.is_fqdn {
            f.write_char('.')?;
        }
        Ok(())
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.is_fqdn == other.is_fqdn
            && self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(other.labels.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_fqdn.hash(state);
        for label in &self.labels {
            label.to_ascii_lowercase().hash(state);
        }
    }
}
