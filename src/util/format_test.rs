use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn groups_thousands() {
    assert_eq!(format_price(4_500_000.0), "$4,500,000");
    assert_eq!(format_price(1_000.0), "$1,000");
    assert_eq!(format_price(999.0), "$999");
    assert_eq!(format_price(0.0), "$0");
}

#[test]
fn rounds_to_whole_pesos() {
    assert_eq!(format_price(1_250.6), "$1,251");
}

// =============================================================
// price_label
// =============================================================

#[test]
fn rent_is_monthly() {
    assert_eq!(price_label(12_000.0, true), "$12,000/mes");
    assert_eq!(price_label(12_000.0, false), "$12,000");
}
