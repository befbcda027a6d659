//! PHP `date()`-style pattern rendering.
//!
//! MCP clients of this server already speak PHP's format directive
//! vocabulary, so the clock tool preserves it rather than exposing
//! strftime. Supported directives:
//!
//! | Group    | Directives                 |
//! |----------|----------------------------|
//! | Day      | `d j D l N w S z`          |
//! | Week     | `W o`                      |
//! | Month    | `F M m n t L`              |
//! | Year     | `Y y`                      |
//! | Time     | `a A g G h H i s u v`      |
//! | Timezone | `e I O P T Z`              |
//! | Full     | `c r U`                    |
//!
//! A backslash escapes the following character. Characters with no
//! directive meaning pass through literally, as PHP does. Recognized PHP
//! directives this renderer does not implement (`B`, `p`, `x`, `X`)
//! produce a [`FormatError`] instead of silently wrong output.

use chrono::{DateTime, Datelike, NaiveDate, Offset, Timelike};
use chrono_tz::{OffsetComponents, Tz};
use thiserror::Error;

/// A format pattern could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unsupported format directive '{0}'")]
    UnsupportedDirective(char),
}

/// Render `moment` against a PHP `date()`-style pattern.
pub fn render(moment: &DateTime<Tz>, pattern: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },

            // Day
            'd' => out.push_str(&format!("{:02}", moment.day())),
            'j' => out.push_str(&moment.day().to_string()),
            'D' => out.push_str(&moment.format("%a").to_string()),
            'l' => out.push_str(&moment.format("%A").to_string()),
            'N' => out.push_str(&moment.weekday().number_from_monday().to_string()),
            'w' => out.push_str(&moment.weekday().num_days_from_sunday().to_string()),
            'S' => out.push_str(ordinal_suffix(moment.day())),
            'z' => out.push_str(&moment.ordinal0().to_string()),

            // Week
            'W' => out.push_str(&format!("{:02}", moment.iso_week().week())),
            'o' => out.push_str(&moment.iso_week().year().to_string()),

            // Month
            'F' => out.push_str(&moment.format("%B").to_string()),
            'M' => out.push_str(&moment.format("%b").to_string()),
            'm' => out.push_str(&format!("{:02}", moment.month())),
            'n' => out.push_str(&moment.month().to_string()),
            't' => out.push_str(&days_in_month(moment.year(), moment.month()).to_string()),
            'L' => out.push(if is_leap_year(moment.year()) { '1' } else { '0' }),

            // Year
            'Y' => out.push_str(&moment.year().to_string()),
            'y' => out.push_str(&format!("{:02}", moment.year().rem_euclid(100))),

            // Time
            'a' => out.push_str(if moment.hour12().0 { "pm" } else { "am" }),
            'A' => out.push_str(if moment.hour12().0 { "PM" } else { "AM" }),
            'g' => out.push_str(&moment.hour12().1.to_string()),
            'h' => out.push_str(&format!("{:02}", moment.hour12().1)),
            'G' => out.push_str(&moment.hour().to_string()),
            'H' => out.push_str(&format!("{:02}", moment.hour())),
            'i' => out.push_str(&format!("{:02}", moment.minute())),
            's' => out.push_str(&format!("{:02}", moment.second())),
            'u' => out.push_str(&format!("{:06}", moment.timestamp_subsec_micros())),
            'v' => out.push_str(&format!("{:03}", moment.timestamp_subsec_millis())),

            // Timezone
            'e' => out.push_str(moment.timezone().name()),
            'I' => out.push(if moment.offset().dst_offset().is_zero() {
                '0'
            } else {
                '1'
            }),
            'O' => out.push_str(&utc_offset(moment, false)),
            'P' => out.push_str(&utc_offset(moment, true)),
            'T' => out.push_str(&moment.format("%Z").to_string()),
            'Z' => out.push_str(&moment.offset().fix().local_minus_utc().to_string()),

            // Full date/time
            'c' => {
                out.push_str(&moment.format("%Y-%m-%dT%H:%M:%S").to_string());
                out.push_str(&utc_offset(moment, true));
            }
            'r' => out.push_str(&moment.to_rfc2822()),
            'U' => out.push_str(&moment.timestamp().to_string()),

            'B' | 'p' | 'x' | 'X' => return Err(FormatError::UnsupportedDirective(c)),

            other => out.push(other),
        }
    }

    Ok(out)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// UTC offset as `+0100` or, with a colon, `+01:00`.
fn utc_offset(moment: &DateTime<Tz>, colon: bool) -> String {
    let seconds = moment.offset().fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    let (hours, minutes) = (seconds / 3600, (seconds % 3600) / 60);
    if colon {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}
