use super::*;

#[test]
fn fecha_legible_truncates_to_minutes() {
    assert_eq!(fecha_legible("2025-06-01T10:00:00.000Z"), "2025-06-01 10:00");
}

#[test]
fn fecha_corta_keeps_date_only() {
    assert_eq!(fecha_corta("2025-06-01T10:00:00.000Z"), "2025-06-01");
}

#[test]
fn fecha_input_matches_datetime_local_format() {
    assert_eq!(fecha_input("2025-06-01T10:00:00.000Z"), "2025-06-01T10:00");
}

#[test]
fn short_or_empty_inputs_pass_through() {
    assert_eq!(fecha_legible(""), "");
    assert_eq!(fecha_corta("2025"), "2025");
    assert_eq!(fecha_input("2025-06-01"), "2025-06-01");
}
