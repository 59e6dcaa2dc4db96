use mockito::Matcher;
use rattendance::core::dispatcher::{interpret_response, is_structured_content, parse_structured};
use rattendance::core::{ReportSession, ResponseDispatcher, WorkflowState};
use rattendance::errors::{AppError, DispatchError, PreconditionError};
use rattendance::models::{CellValue, FileCandidate, Frequency, GenerationResult, Scope};
use std::time::Duration;

mod common;
use common::{SAMPLE_CSV, day};

fn dispatcher(url: String) -> ResponseDispatcher {
    ResponseDispatcher::new(url, Duration::from_secs(5)).expect("client")
}

fn session_with(name: &str) -> ReportSession {
    let mut s = ReportSession::new(day(2025, 3, 10), false);
    s.select_file(FileCandidate::new(name, SAMPLE_CSV.as_bytes().to_vec()))
        .expect("valid file");
    s
}

// ---------------------------
// Network exchange
// ---------------------------

#[tokio::test]
async fn test_binary_reply_becomes_document() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/reports/generate")
        .match_header("content-type", Matcher::Regex("multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="march.csv""#.into()),
            Matcher::Regex(r#"name="reportType"\s+daily"#.into()),
            Matcher::Regex(r#"name="reportScope"\s+office"#.into()),
            Matcher::Regex(r#"name="targetDate"\s+2025-03-10"#.into()),
            Matcher::Regex(r#"name="targetMonth"\s+2025-03"#.into()),
        ]))
        .with_status(200)
        .with_header(
            "content-type",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )
        .with_header("content-disposition", r#"attachment; filename="Attendance_Report_daily.xlsx""#)
        .with_body(b"PK\x03\x04fake")
        .create_async()
        .await;

    let mut s = session_with("march.csv");
    let d = dispatcher(format!("{}/api/reports/generate", server.url()));
    s.generate(&d).await.expect("preconditions");

    mock.assert_async().await;

    let doc = s.result().and_then(GenerationResult::as_document).expect("document");
    assert_eq!(doc.suggested_filename, "Attendance_Report_daily.xlsx");
    assert_eq!(doc.handle.len(), 8);
}

#[tokio::test]
async fn test_non_ascii_disposition_filename_is_kept() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_header("content-disposition", "attachment; filename=\"Présence.xlsx\"")
        .with_body(b"PK\x03\x04")
        .create_async()
        .await;

    let mut s = session_with("march.csv");
    let d = dispatcher(format!("{}/reports/generate", server.url()));
    s.generate(&d).await.expect("preconditions");

    let doc = s.result().and_then(GenerationResult::as_document).expect("document");
    assert_eq!(doc.suggested_filename, "Présence.xlsx");
}

#[tokio::test]
async fn test_employee_monthly_submission_sends_trimmed_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/reports/generate")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="reportType"\s+monthly"#.into()),
            Matcher::Regex(r#"name="reportScope"\s+employee"#.into()),
            Matcher::Regex(r#"name="targetMonth"\s+2025-02"#.into()),
            Matcher::Regex(r#"name="targetDate"\s+2025-03-10"#.into()),
            Matcher::Regex(r#"name="employeeId"\s+E042\s"#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"dateStr":"February 2025","title":"Employee Attendance","subtitle":"E042",
                "columns":["Date","Status","Hours"],
                "rows":[{"date":"2025-02-03","status":"Present","hours":8},
                        {"date":"2025-02-04","status":"Late","hours":7.5}]}"#,
        )
        .create_async()
        .await;

    let mut s = session_with("feb.xlsx");
    s.set_frequency(Frequency::Monthly).expect("editable");
    s.set_target_month("2025-02".parse().expect("month")).expect("editable");
    s.set_scope(Scope::Employee).expect("editable");
    s.set_employee_id("  E042  ").expect("editable");

    let d = dispatcher(format!("{}/reports/generate", server.url()));
    s.generate(&d).await.expect("preconditions");

    mock.assert_async().await;

    let report = s.result().and_then(GenerationResult::as_report).expect("report");
    assert_eq!(report.title, "Employee Attendance");
    assert_eq!(report.date_label, "February 2025");
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[1][1], CellValue::Status(rattendance::models::AttendanceStatus::Late));
}

#[tokio::test]
async fn test_missing_employee_id_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/reports/generate")
        .expect(0)
        .create_async()
        .await;

    let mut s = session_with("march.csv");
    s.set_scope(Scope::Employee).expect("editable");

    let d = dispatcher(format!("{}/reports/generate", server.url()));
    let err = s.generate(&d).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Precondition(PreconditionError::MissingEmployeeId)
    ));
    assert!(matches!(s.state(), WorkflowState::Configuring));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_then_successful_retry() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/reports/generate")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    let mut s = session_with("march.csv");
    let d = dispatcher(format!("{}/reports/generate", server.url()));

    match s.generate(&d).await.expect("preconditions") {
        WorkflowState::Failed(reason) => {
            assert!(matches!(reason, DispatchError::ServerError(500)));
        }
        other => panic!("expected failed, got {}", other.name()),
    }
    failing.assert_async().await;
    failing.remove_async().await;

    server
        .mock("POST", "/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.7")
        .create_async()
        .await;

    s.generate(&d).await.expect("preconditions");
    let doc = s.result().and_then(GenerationResult::as_document).expect("document");
    assert_eq!(doc.suggested_filename, "Attendance_Report_daily.xlsx");
}

#[tokio::test]
async fn test_unreachable_service() {
    let mut s = session_with("march.csv");
    let d = dispatcher("http://127.0.0.1:1/reports/generate".to_string());

    match s.generate(&d).await.expect("preconditions") {
        WorkflowState::Failed(reason) => {
            assert!(matches!(reason, DispatchError::Unreachable { .. }));
            assert_eq!(reason.status_code(), None);
            assert!(std::error::Error::source(reason).is_some());
        }
        other => panic!("expected failed, got {}", other.name()),
    }
}

#[tokio::test]
async fn test_malformed_json_is_unreachable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body("{not json")
        .create_async()
        .await;

    let mut s = session_with("march.csv");
    let d = dispatcher(format!("{}/reports/generate", server.url()));

    assert!(matches!(
        s.generate(&d).await.expect("preconditions"),
        WorkflowState::Failed(DispatchError::Unreachable { .. })
    ));
}

// ---------------------------
// Reply interpretation
// ---------------------------

#[test]
fn test_structured_content_types() {
    assert!(is_structured_content(Some("application/json")));
    assert!(is_structured_content(Some("Application/JSON; charset=utf-8")));
    assert!(is_structured_content(Some("application/problem+json")));
    assert!(!is_structured_content(Some("application/pdf")));
    assert!(!is_structured_content(Some("text/csv")));
    assert!(!is_structured_content(None));
}

#[test]
fn test_object_rows_keep_key_order() {
    let body = br#"{"columns":["Name","Login","Status"],
        "rows":[{"name":"Ada","login":"09:02","status":"Present"},
                {"status":"Absent","name":"Bob","login":null}]}"#;

    let report = parse_structured(body).expect("valid payload");

    assert_eq!(report.rows[0][0], CellValue::Text("Ada".into()));
    assert_eq!(report.rows[0][2].status().map(|s| s.as_str()), Some("Present"));
    // positional: the second row follows its own key order
    assert_eq!(report.rows[1][0].status().map(|s| s.as_str()), Some("Absent"));
    assert_eq!(report.rows[1][2], CellValue::Empty);
}

#[test]
fn test_arity_mismatch_is_kept() {
    let body = br#"{"columns":["A","B","C"],"rows":[[1,2],[1,2,3,4],["x","y","z"]]}"#;

    let report = parse_structured(body).expect("valid payload");

    assert_eq!(report.mismatched_rows(), vec![0, 1]);
    assert_eq!(report.rows[1].len(), 4);
    assert_eq!(report.cell(0, 2), &CellValue::Empty);
}

#[test]
fn test_scalar_rows_are_rejected() {
    let body = br#"{"columns":["A"],"rows":[1,2]}"#;
    assert!(matches!(
        parse_structured(body),
        Err(DispatchError::Unreachable { .. })
    ));

    let body = br#"{"title":"no columns"}"#;
    assert!(parse_structured(body).is_err());
}

#[test]
fn test_empty_binary_body_is_unreachable() {
    let result = interpret_response(
        Frequency::Daily,
        Some("application/octet-stream"),
        None,
        bytes::Bytes::new(),
    );
    assert!(matches!(result, Err(DispatchError::Unreachable { .. })));
}

#[test]
fn test_empty_structured_report_is_success() {
    let result = interpret_response(
        Frequency::Monthly,
        Some("application/json"),
        None,
        bytes::Bytes::from_static(br#"{"columns":["A","B"],"rows":[]}"#),
    )
    .expect("valid");

    let report = result.as_report().expect("report");
    assert!(report.rows.is_empty());
    assert_eq!(report.columns.len(), 2);
}

#[tokio::test]
async fn test_abandoned_submission_does_not_block_the_session() {
    // accepts connections but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let mut s = session_with("march.csv");
    let d = dispatcher(format!("http://{addr}/reports/generate"));

    let timed_out = tokio::time::timeout(Duration::from_millis(300), s.generate(&d)).await;
    assert!(timed_out.is_err());

    match s.state() {
        WorkflowState::Failed(reason) => {
            assert!(matches!(reason, DispatchError::Unreachable { .. }));
        }
        other => panic!("expected failed, got {}", other.name()),
    }

    assert!(s.set_frequency(Frequency::Monthly).expect("editable"));
    assert!(matches!(s.state(), WorkflowState::Configuring));
    assert!(s.begin_submission().expect("preconditions").is_some());

    drop(listener);
}
