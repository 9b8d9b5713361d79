use super::PAGE_SEPARATOR;
use regex::Regex;
use std::sync::LazyLock;

/// Newline runs, including newlines separated only by horizontal whitespace
static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[^\S\n]*\n)+").expect("static regex must compile"));

/// Two or more horizontal whitespace characters
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]{2,}").expect("static regex must compile"));

/// Concatenate page texts into a single document string
///
/// Every page is followed by the page separator, including empty pages,
/// so a page that produced no text still leaves its line break behind.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut raw = String::new();
    for page in pages {
        raw.push_str(page.as_ref());
        raw.push(PAGE_SEPARATOR);
    }
    raw
}

/// Collapse extraction noise in document text
///
/// - `\r\n` becomes `\n`
/// - Runs of newlines (blank lines included) become one newline
/// - Runs of two or more spaces/tabs become one space
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    SPACE_RUNS.replace_all(&text, " ").into_owned()
}
