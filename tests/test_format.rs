//! Number formatting tests.

use covmap::format::{
    format_axis, format_compact, format_compact_opt, format_signed_thousands, format_thousands,
    format_thousands_opt, pretty_print_stat,
};

// ---------------------------------------------------------------------------
// compact
// ---------------------------------------------------------------------------

#[test]
fn compact_below_a_thousand_keeps_one_decimal() {
    assert_eq!(format_compact(0), "0.0");
    assert_eq!(format_compact(7), "7.0");
    assert_eq!(format_compact(999), "999.0");
}

#[test]
fn compact_uses_unit_suffixes() {
    assert_eq!(format_compact(1_234), "1.2k");
    assert_eq!(format_compact(45_600), "45.6k");
    assert_eq!(format_compact(3_400_000), "3.4m");
    assert_eq!(format_compact(683_000_000), "683.0m");
    assert_eq!(format_compact(7_900_000_000), "7.9b");
    assert_eq!(format_compact(2_000_000_000_000), "2.0t");
}

#[test]
fn compact_rounding_carries_into_next_unit() {
    assert_eq!(format_compact(999_960), "1.0m");
}

#[test]
fn compact_keeps_sign() {
    assert_eq!(format_compact(-1_500), "-1.5k");
}

// ---------------------------------------------------------------------------
// info box stat
// ---------------------------------------------------------------------------

#[test]
fn pretty_stat_absent_or_zero_is_plus_zero() {
    assert_eq!(pretty_print_stat(None), "+0");
    assert_eq!(pretty_print_stat(Some(0)), "+0");
}

#[test]
fn pretty_stat_prefixes_plus() {
    assert_eq!(pretty_print_stat(Some(12_345)), "+12.3k");
    assert_eq!(pretty_print_stat(Some(210)), "+210.0");
    assert_eq!(pretty_print_stat(Some(-40)), "-40.0");
}

// ---------------------------------------------------------------------------
// thousands / axis
// ---------------------------------------------------------------------------

#[test]
fn thousands_separators() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
    assert_eq!(format_thousands(-106_000_000), "-106,000,000");
}

#[test]
fn signed_thousands_for_tooltips() {
    assert_eq!(format_signed_thousands(5), "+5");
    assert_eq!(format_signed_thousands(12_000), "+12,000");
    assert_eq!(format_signed_thousands(0), "0");
    assert_eq!(format_signed_thousands(-5), "-5");
}

#[test]
fn axis_ticks_have_no_decimals() {
    assert_eq!(format_axis(0), "0");
    assert_eq!(format_axis(500), "500");
    assert_eq!(format_axis(1_200), "1k");
    assert_eq!(format_axis(1_500), "2k");
    assert_eq!(format_axis(250_000), "250k");
}

#[test]
fn optional_counters_read_na_when_absent() {
    assert_eq!(format_thousands_opt(None), "n/a");
    assert_eq!(format_thousands_opt(Some(4_200)), "4,200");
    assert_eq!(format_compact_opt(None), "n/a");
    assert_eq!(format_compact_opt(Some(4_200)), "4.2k");
}
