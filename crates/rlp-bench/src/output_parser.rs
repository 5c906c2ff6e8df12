//! Scraping of the timing lines printed by the compiled test binaries.
//!
//! The binaries report their results as `prefix:value` lines, e.g.
//!
//! ```text
//! rlp encoding times:1000000
//! spent time:12
//! ```
//!
//! Any other line is passed through untouched.

use thiserror::Error;

pub const SPENT_TIME_PREFIX: &str = "spent time";
pub const RLP_TIMES_PREFIX: &str = "rlp encoding times";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {0:?} has no ':' delimited value")]
    MissingDelimiter(String),

    #[error("line {line:?} ends with {token:?}, which is not an integer")]
    InvalidNumber { line: String, token: String },
}

/// Which kind of report a line carries, decided by prefix alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SpentTime,
    RlpEncodingTimes,
    Other,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with(SPENT_TIME_PREFIX) {
            LineKind::SpentTime
        } else if line.starts_with(RLP_TIMES_PREFIX) {
            LineKind::RlpEncodingTimes
        } else {
            LineKind::Other
        }
    }
}

/// A fully parsed output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLine {
    SpentTime(i64),
    RlpEncodingTimes(i64),
    Unrecognized,
}

/// Parse the integer after the last `:` of a line.
///
/// Surrounding whitespace is ignored; the test binaries terminate their
/// report lines with a tab.
pub fn parse_value(line: &str) -> Result<i64, ParseError> {
    let (_, token) = line
        .rsplit_once(':')
        .ok_or_else(|| ParseError::MissingDelimiter(line.to_string()))?;
    let token = token.trim();
    token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
        line: line.to_string(),
        token: token.to_string(),
    })
}

pub fn parse_line(line: &str) -> Result<OutputLine, ParseError> {
    match LineKind::of(line) {
        LineKind::SpentTime => parse_value(line).map(OutputLine::SpentTime),
        LineKind::RlpEncodingTimes => parse_value(line).map(OutputLine::RlpEncodingTimes),
        LineKind::Other => Ok(OutputLine::Unrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("spent time:5", OutputLine::SpentTime(5) ; "spent time")]
    #[test_case("spent time:12\t", OutputLine::SpentTime(12) ; "trailing tab")]
    #[test_case("spent time: 7 ", OutputLine::SpentTime(7) ; "padded value")]
    #[test_case("spent time:a:3", OutputLine::SpentTime(3) ; "last token wins")]
    #[test_case("rlp encoding times:1000000\t", OutputLine::RlpEncodingTimes(1_000_000) ; "rlp count")]
    #[test_case("running test debug.bigint", OutputLine::Unrecognized ; "other line")]
    #[test_case("", OutputLine::Unrecognized ; "empty line")]
    #[test_case("  spent time:5", OutputLine::Unrecognized ; "prefix must start the line")]
    fn test_parse_line(line: &str, expected: OutputLine) {
        assert_eq!(parse_line(line).unwrap(), expected);
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            parse_line("spent time"),
            Err(ParseError::MissingDelimiter("spent time".to_string()))
        );
    }

    #[test_case("spent time:" ; "empty token")]
    #[test_case("spent time:fast" ; "word token")]
    #[test_case("rlp encoding times:1e6" ; "float notation")]
    fn test_invalid_number(line: &str) {
        assert!(matches!(
            parse_line(line),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_line_kind_does_not_parse() {
        // classification alone never fails, even on malformed values
        assert_eq!(LineKind::of("rlp encoding times:lots"), LineKind::RlpEncodingTimes);
        assert_eq!(LineKind::of("spent time"), LineKind::SpentTime);
        assert_eq!(LineKind::of("SUCCESS"), LineKind::Other);
    }
}
