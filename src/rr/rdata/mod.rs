// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! All record data structures and related serialization methods

mod a;
mod aaaa;
mod dnskey;
mod ds;
mod mx;
mod name;
mod nsec;
mod nsec3;
mod null;
mod opt;
mod rrsig;
mod soa;
mod sshfp;
mod txt;

pub use self::a::A;
pub use self::aaaa::AAAA;
pub use self::dnskey::DNSKEY;
pub use self::ds::DS;
pub use self::mx::MX;
pub use self::name::{CNAME, NS};
pub use self::nsec::NSEC;
pub use self::nsec3::NSEC3;
pub use self::null::NULL;
pub use self::opt::OPT;
pub use self::rrsig::RRSIG;
pub use self::soa::SOA;
pub use self::sshfp::SSHFP;
pub use self::txt::TXT;

pub(crate) use self::rrsig::SERIAL_TIME;
