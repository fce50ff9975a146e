//! Record opening pattern
//!
//! A record starts on a line such as `  (symbol "R_0402" (pin_names ...`.
//! Sub-unit definitions (`(symbol "R_0402_0_1"`) never carry the trailing
//! `(pin` token, so only top-level symbols match.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::bytes::Regex;

/// Anchored pattern for the first line of a record
pub const OPENING_PATTERN: &str = r#"^\s*\(symbol "(?P<name>.+)" \(pin"#;

static OPENING_RE: OnceLock<Regex> = OnceLock::new();

fn opening_re() -> &'static Regex {
    OPENING_RE.get_or_init(|| {
        // Constant pattern, exercised by the tests below
        Regex::new(OPENING_PATTERN).expect("opening pattern must compile")
    })
}

/// Extract the record name if `line` is a record opening line
pub fn record_name(line: &[u8]) -> Option<Cow<'_, str>> {
    opening_re()
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| String::from_utf8_lossy(m.as_bytes()))
}

/// Check whether `line` opens the record called `name`
pub fn opens_record(line: &[u8], name: &str) -> bool {
    record_name(line).is_some_and(|found| found == name)
}
