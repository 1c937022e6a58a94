use super::*;

#[test]
fn rupiah_groups_thousands_with_dots() {
    assert_eq!(format_rupiah(0), "Rp0");
    assert_eq!(format_rupiah(999), "Rp999");
    assert_eq!(format_rupiah(10_000), "Rp10.000");
    assert_eq!(format_rupiah(1_000_000), "Rp1.000.000");
    assert_eq!(format_rupiah(1_234_567_890), "Rp1.234.567.890");
}

#[test]
fn dates_render_day_first_without_zero_padding() {
    assert_eq!(format_date("2025-01-05T08:30:00Z"), "5/1/2025 08:30");
    assert_eq!(format_date("2025-12-31T23:59:00+00:00"), "31/12/2025 23:59");
}

#[test]
fn unparseable_dates_render_a_placeholder() {
    assert_eq!(format_date("yesterday"), "Invalid date");
    assert_eq!(format_date(""), "Invalid date");
}
