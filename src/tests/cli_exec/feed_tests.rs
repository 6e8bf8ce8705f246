use super::*;

#[test]
fn rfc3339_timestamps_render_as_date_and_minute() {
    assert_eq!(
        render_timestamp("2024-01-15T10:30:00Z"),
        "2024-01-15 10:30"
    );
}

#[test]
fn unparseable_timestamps_pass_through() {
    assert_eq!(render_timestamp("yesterday"), "yesterday");
    assert_eq!(render_timestamp(""), "");
}
