// Copyright 2015-2023 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// https://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// https://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! End to end zone parsing scenarios against the public API.

use std::path::PathBuf;

use zonefile::{new_rr, parse_zone, read_rr, DNSClass, ParseResult, Record, RecordType};

fn records(input: &str) -> Vec<Record> {
    parse_zone(input.as_bytes(), "")
        .collect::<ParseResult<Vec<_>>>()
        .expect("parse failed")
}

#[test]
fn simple_a_record() {
    let rrs = records("miek.nl. IN A 127.0.0.1\n");
    assert_eq!(rrs.len(), 1);
    let rr = &rrs[0];
    assert_eq!(rr.name().to_string(), "miek.nl.");
    assert_eq!(rr.dns_class(), DNSClass::IN);
    assert_eq!(rr.ttl(), zonefile::DEFAULT_TTL);
    assert_eq!(rr.record_type(), RecordType::A);
    assert_eq!(rr.data().to_string(), "127.0.0.1");
}

#[test]
fn origin_and_ttl_directives_shape_the_record() {
    let rrs = records("$ORIGIN miek.nl.\n$TTL 300\nwww IN A 10.0.0.1\n");
    assert_eq!(rrs.len(), 1);
    assert_eq!(rrs[0].name().to_string(), "www.miek.nl.");
    assert_eq!(rrs[0].ttl(), 300);
}

#[test]
fn mx_with_explicit_ttl() {
    let rrs = records("miek.nl. 3600 IN MX 10 mail.miek.nl.\n");
    let mx = rrs[0].data().as_mx().unwrap();
    assert_eq!(mx.preference(), 10);
    assert_eq!(mx.exchange().to_string(), "mail.miek.nl.");
}

#[test]
fn multiline_soa_with_root_origin() {
    let rrs = records("miek.nl. IN SOA ns root (\n 1 2 3 4 5\n)\n");
    let soa = rrs[0].data().as_soa().unwrap();
    assert_eq!(soa.mname().to_string(), "ns.");
    assert_eq!(soa.rname().to_string(), "root.");
    assert_eq!(soa.serial(), 1);
    assert_eq!(soa.refresh(), 2);
    assert_eq!(soa.retry(), 3);
    assert_eq!(soa.expire(), 4);
    assert_eq!(soa.minimum(), 5);
}

#[test]
fn unterminated_braces_point_at_the_opening_brace() {
    let err = parse_zone("miek.nl. IN A (\n 127.0.0.1\n".as_bytes(), "")
        .collect::<ParseResult<Vec<_>>>()
        .unwrap_err();
    assert_eq!(err.line(), 1);
    assert!(err.to_string().contains("unclosed brace"), "{err}");
}

#[test]
fn semicolon_survives_inside_quotes() {
    let rrs = records("miek.nl. IN TXT \"hello ; world\"\n");
    let txt = rrs[0].data().as_txt().unwrap();
    assert_eq!(txt.txt_data(), "hello ; world");
}

#[test]
fn every_emitted_name_is_fully_qualified() {
    let input = "$ORIGIN miek.nl.\nwww IN A 10.0.0.1\nmx IN MX 10 mail\n IN NS ns1\n";
    for rr in records(input) {
        assert!(rr.name().is_fqdn(), "{} is relative", rr.name());
    }
}

#[test]
fn records_stream_in_source_order() {
    let input = "\
$ORIGIN miek.nl.
a IN A 10.0.0.1
b IN A 10.0.0.2
c IN A 10.0.0.3
";
    let names: Vec<String> = records(input).iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, ["a.miek.nl.", "b.miek.nl.", "c.miek.nl."]);
}

#[test]
fn first_error_is_the_last_item() {
    let mut parser = parse_zone(
        "a.nl. IN A 10.0.0.1\nb.nl. IN A not-an-address\nc.nl. IN A 10.0.0.3\n".as_bytes(),
        "",
    );
    assert!(parser.next().unwrap().is_ok());
    assert!(parser.next().unwrap().is_err());
    assert!(parser.next().is_none());
}

#[test]
fn ttl_precedence() {
    let input = "\
a.nl. IN A 10.0.0.1
$TTL 120
b.nl. IN A 10.0.0.2
c.nl. 99 IN A 10.0.0.3
d.nl. IN A 10.0.0.4
";
    let rrs = records(input);
    assert_eq!(rrs[0].ttl(), zonefile::DEFAULT_TTL);
    assert_eq!(rrs[1].ttl(), 120);
    assert_eq!(rrs[2].ttl(), 99);
    assert_eq!(rrs[3].ttl(), 120);
}

#[test]
fn to_text_round_trips() {
    let cases = [
        "miek.nl. 3600 IN A 127.0.0.1",
        "miek.nl. 3600 IN AAAA 2001:db8::53",
        "miek.nl. 3600 IN NS ns1.miek.nl.",
        "www.miek.nl. 300 IN CNAME miek.nl.",
        "miek.nl. 3600 IN MX 10 mx.miek.nl.",
        "miek.nl. 3600 IN SOA ns.miek.nl. hostmaster.miek.nl. 2024010101 14400 3600 604800 86400",
        "miek.nl. 3600 IN TXT \"v=spf1 -all\"",
        "miek.nl. 3600 IN SSHFP 2 1 2BB183AF5F22588179A53B0A98631FAD1A292118",
        "miek.nl. 3600 IN DS 60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118",
        "miek.nl. 3600 IN DNSKEY 257 3 8 aGVsbG8gd29ybGQ=",
        "miek.nl. 3600 IN RRSIG NS 8 2 3600 20300101000000 20250101000000 2642 miek.nl. aGVsbG8gd29ybGQ=",
        "miek.nl. 3600 IN NSEC host.miek.nl. A MX RRSIG NSEC",
        "miek.nl. 3600 IN NSEC3 1 1 12 AABBCCDD 2vptu5timamqttgl4luu9kg21e0aor3s A RRSIG",
        "miek.nl. 3600 IN TYPE1234 \\# 4 C0000201",
    ];
    for case in cases {
        let rr = new_rr(case).unwrap_or_else(|e| panic!("{case}: {e}"));
        let reparsed =
            new_rr(&rr.to_string()).unwrap_or_else(|e| panic!("{}: {e}", rr.to_string()));
        assert_eq!(rr, reparsed, "round trip of {case}");
    }
}

#[test]
fn reparsing_the_first_record_is_stable() {
    let text = "miek.nl. IN MX 10 mx.miek.nl.";
    let once = new_rr(text).unwrap();
    let again = new_rr(&format!("{text}\n")).unwrap();
    assert_eq!(once, again);
}

#[test]
fn read_rr_discards_the_tail() {
    let rr = read_rr(
        "a.nl. IN A 10.0.0.1\nthis is not even valid zone syntax\n".as_bytes(),
        "",
    )
    .unwrap();
    assert_eq!(rr.name().to_string(), "a.nl.");
}

#[test]
fn dnssec_variants_are_discriminable() {
    let input = "\
$ORIGIN miek.nl.
miek.nl. IN SOA ns hostmaster 1 2 3 4 5
miek.nl. IN DNSKEY 256 3 8 aGVsbG8=
miek.nl. IN RRSIG DNSKEY 8 2 3600 20300101000000 20250101000000 2642 miek.nl. c2ln
";
    let rrs = records(input);
    let rrsigs: Vec<_> = rrs.iter().filter_map(|r| r.data().as_rrsig()).collect();
    let dnskeys: Vec<_> = rrs.iter().filter_map(|r| r.data().as_dnskey()).collect();
    assert_eq!(rrsigs.len(), 1);
    assert_eq!(dnskeys.len(), 1);
    assert_eq!(rrsigs[0].type_covered(), RecordType::DNSKEY);
}

// $INCLUDE machinery, against real files

struct TempZone(PathBuf);

impl TempZone {
    fn new(name: &str, content: &str) -> Self {
        let mut path = std::env::temp_dir();
        path.push(format!("zonefile-it-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        Self(path)
    }

    fn path(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for TempZone {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn include_splices_records_at_the_inclusion_point() {
    let child = TempZone::new(
        "child.zone",
        "$ORIGIN example.org.\nc IN A 10.0.0.3\n",
    );
    let input = format!(
        "$ORIGIN miek.nl.\na IN A 10.0.0.1\n$INCLUDE {}\nb IN A 10.0.0.2\n",
        child.path()
    );
    let names: Vec<String> = records(&input).iter().map(|r| r.name().to_string()).collect();
    // depth first, and the child's $ORIGIN does not leak back out
    assert_eq!(names, ["a.miek.nl.", "c.example.org.", "b.miek.nl."]);
}

#[test]
fn include_inherits_origin_and_default_ttl() {
    let child = TempZone::new("inherit.zone", "www IN A 10.0.0.5\n");
    let input = format!(
        "$ORIGIN miek.nl.\n$TTL 111\n$INCLUDE {}\n",
        child.path()
    );
    let rrs = records(&input);
    assert_eq!(rrs[0].name().to_string(), "www.miek.nl.");
    assert_eq!(rrs[0].ttl(), 111);
}

#[test]
fn include_depth_is_capped_at_seven() {
    // an 8 deep chain of includes must fail at the 8th
    let mut files: Vec<TempZone> = Vec::new();
    let mut content = "deep.nl. IN A 10.0.0.8\n".to_string();
    for i in (1..=8).rev() {
        let file = TempZone::new(&format!("depth{i}.zone"), &content);
        content = format!("$INCLUDE {}\n", file.path());
        files.push(file);
    }
    // `content` now includes depth1 -> ... -> depth8
    let err = parse_zone(content.as_bytes(), "top.zone")
        .collect::<ParseResult<Vec<_>>>()
        .unwrap_err();
    assert!(
        err.to_string().contains("too deeply nested $INCLUDE"),
        "{err}"
    );

    // one level less is fine: start the chain at depth2
    let shallower = format!("$INCLUDE {}\n", files[6].path());
    let rrs = parse_zone(shallower.as_bytes(), "top.zone")
        .collect::<ParseResult<Vec<_>>>()
        .unwrap();
    assert_eq!(rrs.len(), 1);
    assert_eq!(rrs[0].name().to_string(), "deep.nl.");
}

#[test]
fn include_open_failure_names_the_file() {
    let input = "$INCLUDE /definitely/not/a/real/zone.db\n";
    let err = parse_zone(input.as_bytes(), "top.zone")
        .collect::<ParseResult<Vec<_>>>()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to open"), "{msg}");
    assert!(msg.contains("/definitely/not/a/real/zone.db"), "{msg}");
    assert!(msg.starts_with("top.zone: "), "{msg}");
}
