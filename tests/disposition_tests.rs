use rattendance::core::disposition::{fallback_filename, filename_from_disposition, resolve_filename};
use rattendance::models::Frequency;

#[test]
fn test_quoted_filename() {
    assert_eq!(
        filename_from_disposition(r#"attachment; filename="Attendance_Report_daily.xlsx""#),
        Some("Attendance_Report_daily.xlsx".to_string())
    );
}

#[test]
fn test_bare_filename_and_case() {
    assert_eq!(
        filename_from_disposition("attachment; filename=march.pdf"),
        Some("march.pdf".to_string())
    );
    assert_eq!(
        filename_from_disposition("attachment; FILENAME=march.pdf; size=10"),
        Some("march.pdf".to_string())
    );
}

#[test]
fn test_path_components_are_stripped() {
    assert_eq!(
        filename_from_disposition(r#"attachment; filename="../../etc/passwd""#),
        Some("passwd".to_string())
    );
    assert_eq!(
        filename_from_disposition(r#"attachment; filename="C:\reports\x.xlsx""#),
        Some("x.xlsx".to_string())
    );
}

#[test]
fn test_unusable_values_fall_back() {
    for header in [
        "attachment",
        r#"attachment; filename="""#,
        r#"attachment; filename="..""#,
        "inline; name=x.xlsx",
    ] {
        assert_eq!(filename_from_disposition(header), None, "{header}");
        assert_eq!(
            resolve_filename(Some(header), Frequency::Monthly),
            "Attendance_Report_monthly.xlsx"
        );
    }
}

#[test]
fn test_missing_header_uses_frequency_name() {
    assert_eq!(resolve_filename(None, Frequency::Daily), "Attendance_Report_daily.xlsx");
    assert_eq!(fallback_filename(Frequency::Monthly), "Attendance_Report_monthly.xlsx");
}
