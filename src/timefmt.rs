//! Moment-style date format translation.
//!
//! Settings store date formats as moment.js tokens (`YYYY-MM-DD HH:mm:ss`),
//! the convention of the note-taking hosts this crate bridges to. chrono
//! wants strftime specifiers, so formats are translated before use.
//!
//! Supported tokens: `YYYY YY MM M DD D HH H hh mm m ss s`, plus `[...]`
//! for literal text. Everything else passes through unchanged, with `%`
//! escaped so arbitrary configured text can never form a stray strftime
//! specifier (chrono panics on invalid ones at display time).

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]|YYYY|YY|MM|M|DD|D|HH|H|hh|mm|m|ss|s|%").unwrap()
});

/// Translate a moment-style format string into a chrono strftime string.
pub fn to_strftime(moment_format: &str) -> String {
    TOKEN_RE
        .replace_all(moment_format, |caps: &Captures| {
            if let Some(literal) = caps.get(1) {
                return literal.as_str().replace('%', "%%");
            }
            match &caps[0] {
                "YYYY" => "%Y",
                "YY" => "%y",
                "MM" => "%m",
                "M" => "%-m",
                "DD" => "%d",
                "D" => "%-d",
                "HH" => "%H",
                "H" => "%-H",
                "hh" => "%I",
                "mm" => "%M",
                "m" => "%-M",
                "ss" => "%S",
                "s" => "%-S",
                "%" => "%%",
                other => other,
            }
            .to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_timestamp_format() {
        assert_eq!(to_strftime("YYYY-MM-DD HH:mm:ss"), "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_default_daily_note_format() {
        assert_eq!(to_strftime("YYYY-MM-DD"), "%Y-%m-%d");
    }

    #[test]
    fn test_unpadded_tokens() {
        assert_eq!(to_strftime("D.M.YY"), "%-d.%-m.%y");
    }

    #[test]
    fn test_bracket_literals_pass_through() {
        assert_eq!(to_strftime("[day] DD"), "day %d");
        // Bracketed text containing format-like tokens stays literal
        assert_eq!(to_strftime("[MM] MM"), "MM %m");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(to_strftime("100%"), "100%%");
        assert_eq!(to_strftime("[50%]"), "50%%");
    }

    #[test]
    fn test_formats_a_real_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let fmt = to_strftime("YYYY-MM-DD");
        assert_eq!(date.format(&fmt).to_string(), "2024-01-09");
    }

    #[test]
    fn test_unbracketed_token_letters_are_translated() {
        // Token letters act as tokens anywhere, as in moment; literal
        // text must be bracketed.
        assert_eq!(to_strftime("notes, YYYY"), "note%-S, %Y");
        assert_eq!(to_strftime("[notes], YYYY"), "notes, %Y");
    }
}
