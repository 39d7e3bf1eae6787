//! Printable quoting.

use conn_string::buffer::QuoteBuf;
use conn_string::quote::{quote, quote_data, write_quoted, Quoted};

#[test]
fn printable_round_is_identity() {
    let src: Vec<u8> = (0x20..=0x7e).collect();
    let mut dst = [0_u8; 128];
    let n = quote_data(&mut dst, &src).expect("fits");
    assert_eq!(&dst[..n], &src[..]);
}

#[test]
fn non_printables_escape_to_four_bytes() {
    let mut dst = [0_u8; 8];
    for b in (0x00..0x20).chain(0x7f..=0xff_u16).map(|b| b as u8) {
        let n = quote_data(&mut dst, &[b]).expect("fits");
        assert_eq!(n, 4, "byte {:#04x}", b);
        assert_eq!(&dst[..2], b"\\x");
        let hex = core::str::from_utf8(&dst[2..4]).expect("ascii");
        assert_eq!(u8::from_str_radix(hex, 16).expect("hex digits"), b);
        assert_eq!(hex, hex.to_lowercase(), "escape digits are lowercase");
    }
}

#[test]
fn known_escapes() {
    let mut dst = [0_u8; 16];
    let n = quote_data(&mut dst, b"\x00").expect("fits");
    assert_eq!(&dst[..n], b"\\x00");
    let n = quote_data(&mut dst, b"\xff").expect("fits");
    assert_eq!(&dst[..n], b"\\xff");
}

#[test]
fn overflow_reports_valid_prefix() {
    let mut dst = [0_u8; 5];
    // Two printables fit, then the escape needs four bytes and the trailing
    // printables never get a look.
    let err = quote_data(&mut dst, b"ab\x00cd").expect_err("overflows");
    assert_eq!(err.written(), 2);
    assert_eq!(&dst[..err.written()], b"ab");
}

#[test]
fn zero_capacity_overflows_cleanly() {
    let err = quote_data(&mut [], b"\x00").expect_err("overflows");
    assert_eq!(err.written(), 0);
}

#[test]
fn growable_never_overflows() {
    let mut buf = QuoteBuf::new();
    let src: Vec<u8> = (0x00..=0xff_u16).map(|b| b as u8).collect();
    quote(&mut buf, &src).expect("allocation");
    assert!(buf.len() <= 4 * src.len());

    // Spot-check the committed content: identity for printables, escapes
    // for the rest, in input order.
    let text = core::str::from_utf8(buf.as_bytes()).expect("quoted output is ASCII");
    assert!(text.contains("\\x1f !\"")); // escape directly before the printable run
    assert!(text.ends_with("\\xff"));
}

#[test]
fn growable_appends_after_committed_content() {
    let mut buf = QuoteBuf::new();
    quote(&mut buf, b"head \x00").expect("allocation");
    let first = buf.len();
    quote(&mut buf, b" tail").expect("allocation");
    assert_eq!(&buf.as_bytes()[..first], b"head \\x00");
    assert_eq!(&buf.as_bytes()[first..], b" tail");
}

#[test]
fn first_growth_reaches_the_minimum() {
    let mut buf = QuoteBuf::new();
    quote(&mut buf, b"x").expect("allocation");
    assert!(buf.capacity() >= 16);
}

#[test]
fn empty_source_commits_nothing() {
    let mut buf = QuoteBuf::new();
    quote(&mut buf, b"").expect("allocation");
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 0, "no growth for an empty source");
}

#[test]
fn write_quoted_small_payload() {
    let mut out = Vec::new();
    write_quoted(&mut out, b"frame \x00\x01").expect("write");
    assert_eq!(out, b"frame \\x00\\x01");
}

#[test]
fn write_quoted_truncates_with_marker() {
    let mut out = Vec::new();
    let src = vec![b'a'; 300];
    write_quoted(&mut out, &src).expect("write");

    let text = core::str::from_utf8(&out).expect("ascii");
    let marker = "... (truncated)";
    assert!(text.ends_with(marker));
    let body = &text[..text.len() - marker.len()];
    assert_eq!(body.len(), 256);
    assert!(body.bytes().all(|b| b == b'a'));
}

#[test]
fn write_quoted_never_tears_an_escape() {
    let mut out = Vec::new();
    // 100 escapes want 400 bytes; only 64 whole ones fit in 256.
    let src = vec![0x00_u8; 100];
    write_quoted(&mut out, &src).expect("write");

    let text = core::str::from_utf8(&out).expect("ascii");
    let body = text.strip_suffix("... (truncated)").expect("truncated");
    assert_eq!(body.len(), 64 * 4);
    assert!(body.as_bytes().chunks(4).all(|unit| unit == b"\\x00"));
}

#[test]
fn quoted_display_and_debug() {
    assert_eq!(format!("{}", Quoted(b"a\x00b")), "a\\x00b");
    assert_eq!(format!("{:?}", Quoted(b"a\x00b")), "\"a\\x00b\"");
    assert_eq!(format!("{}", Quoted(b"")), "");
}
