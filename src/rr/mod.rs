// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Resource record related components, e.g. `Record`, `RData`, ...

pub mod dns_class;
pub mod domain;
pub mod rdata;
pub mod record_data;
pub mod record_type;
pub mod resource;
pub mod rr_set;

pub use self::dns_class::DNSClass;
pub use self::domain::Name;
pub use self::record_data::RData;
pub use self::record_type::RecordType;
pub use self::resource::Record;
pub use self::rr_set::RecordSet;
