/// ANSI color helper utilities for terminal output.
use crate::models::report::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Badge color of an attendance status:
/// Present → green, Absent → red, Late → yellow
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Absent => RED,
        AttendanceStatus::Late => YELLOW,
    }
}

/// Wrap `value` in `color`, leaving empty strings uncolored.
pub fn paint(value: &str, color: &str) -> String {
    if value.is_empty() {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
