use mockito::Matcher;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_CSV, rat, temp_dir, write_config, write_file};

#[test]
fn test_generate_saves_document() {
    let dir = temp_dir("cli_generate_document");
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_header("content-disposition", "attachment; filename=march_report.xlsx")
        .with_body("PK-document")
        .create();

    let cfg = write_config(&dir, &format!("{}/api", server.url()));
    let sheet = write_file(&dir, "march.csv", SAMPLE_CSV.as_bytes());

    rat()
        .args(["--config", &cfg, "generate", &sheet, "--force"])
        .assert()
        .success()
        .stdout(contains("march_report.xlsx"));

    mock.assert();
    let saved = fs::read(dir.join("march_report.xlsx")).expect("document saved");
    assert_eq!(saved, b"PK-document");
}

#[test]
fn test_generate_output_path_override() {
    let dir = temp_dir("cli_generate_output");
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.7")
        .create();

    let cfg = write_config(&dir, "http://127.0.0.1:1");
    let sheet = write_file(&dir, "march.xlsx", b"PK");
    let target = dir.join("custom.pdf");

    rat()
        .args([
            "--config",
            &cfg,
            "--api",
            &server.url(),
            "generate",
            &sheet,
            "--frequency",
            "monthly",
            "--month",
            "2025-02",
            "--output",
            &target.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success();

    assert_eq!(fs::read(&target).expect("saved"), b"%PDF-1.7");
}

#[test]
fn test_generate_renders_structured_report() {
    let dir = temp_dir("cli_generate_structured");
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/reports/generate")
        .match_body(Matcher::Regex(r#"name="targetDate"\s+2025-03-10"#.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"dateStr":"2025-03-10","title":"Office Attendance","subtitle":"Milan",
                "columns":["Employee","Status"],
                "rows":[{"employee":"Ada","status":"Present"},{"employee":"Bob","status":"Late"}]}"#,
        )
        .create();

    let cfg = write_config(&dir, &server.url());
    let sheet = write_file(&dir, "march.csv", SAMPLE_CSV.as_bytes());
    let export = dir.join("office.csv");

    rat()
        .args([
            "--config",
            &cfg,
            "generate",
            &sheet,
            "--date",
            "2025-03-10",
            "--export",
            &export.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("Office Attendance").and(contains("Ada")).and(contains("Late")));

    let csv = fs::read_to_string(&export).expect("exported");
    assert!(csv.starts_with("Employee,Status"));
    assert!(csv.contains("Bob,Late"));
}

#[test]
fn test_generate_server_error_exits_with_failure() {
    let dir = temp_dir("cli_generate_500");
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/reports/generate")
        .with_status(500)
        .create();

    let cfg = write_config(&dir, &server.url());
    let sheet = write_file(&dir, "march.csv", SAMPLE_CSV.as_bytes());

    rat()
        .args(["--config", &cfg, "generate", &sheet])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:").and(contains("500")));
}

#[test]
fn test_generate_interactive_retry_after_server_error() {
    let dir = temp_dir("cli_generate_retry");
    let mut server = mockito::Server::new();
    let failed = server
        .mock("POST", "/reports/generate")
        .with_status(500)
        .expect(1)
        .create();
    let ok = server
        .mock("POST", "/reports/generate")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_header("content-disposition", "attachment; filename=retry_report.xlsx")
        .with_body("PK-retry")
        .expect(1)
        .create();

    let cfg = write_config(&dir, &server.url());
    let sheet = write_file(&dir, "march.csv", SAMPLE_CSV.as_bytes());

    rat()
        .args(["--config", &cfg, "generate", &sheet, "--interactive", "--force"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Retry?"))
        .stderr(contains("500"));

    failed.assert();
    ok.assert();
    assert_eq!(fs::read(dir.join("retry_report.xlsx")).expect("saved"), b"PK-retry");
}

#[test]
fn test_generate_missing_employee_id_sends_nothing() {
    let dir = temp_dir("cli_generate_no_employee");
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/reports/generate")
        .expect(0)
        .create();

    let cfg = write_config(&dir, &server.url());
    let sheet = write_file(&dir, "march.csv", SAMPLE_CSV.as_bytes());

    rat()
        .args(["--config", &cfg, "generate", &sheet, "--scope", "employee"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("employee ID is required"));

    mock.assert();
}

#[test]
fn test_generate_rejects_unsupported_file() {
    let dir = temp_dir("cli_generate_bad_file");
    let cfg = write_config(&dir, "http://127.0.0.1:1");
    let sheet = write_file(&dir, "notes.txt", b"hello");

    rat()
        .args(["--config", &cfg, "generate", &sheet])
        .assert()
        .failure()
        .stderr(contains("Unsupported file type"));
}

#[test]
fn test_daily_command() {
    let dir = temp_dir("cli_daily");
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/reports/daily")
        .match_query(Matcher::UrlEncoded("date".into(), "2025-03-10".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"employeeName":"Ada","officeLocation":"Milan","status":"Absent"}]"#)
        .create();

    let cfg = write_config(&dir, &server.url());

    rat()
        .args(["--config", &cfg, "daily", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Daily Attendance").and(contains("Milan")).and(contains("Absent")));
}

#[test]
fn test_invalid_month_is_rejected() {
    let dir = temp_dir("cli_monthly_bad");
    let cfg = write_config(&dir, "http://127.0.0.1:1");

    rat()
        .args(["--config", &cfg, "monthly", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month format"));
}

#[test]
fn test_init_and_print_config() {
    let dir = temp_dir("cli_init");
    let cfg = dir.join("nested").join("rattendance.conf");
    let cfg = cfg.to_string_lossy().to_string();

    rat()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let written = fs::read_to_string(&cfg).expect("config written");
    assert!(written.contains("api_base"));
    assert!(written.contains("generate_path"));

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timeout_secs: 60"));
}
