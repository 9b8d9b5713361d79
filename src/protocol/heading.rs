use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Numbered heading candidate: digits, a period, a space, then an uppercase
/// (possibly accented) letter and the rest of the line
static HEADING_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\. [A-ZÀ-ÖØ-Þ][^\n]*").expect("static regex must compile")
});

/// Numbered heading beginning at the start of the haystack
static HEADING_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. [A-ZÀ-ÖØ-Þ]").expect("static regex must compile"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("static regex must compile"));

/// Byte span of a heading inside normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSpan {
    pub start: usize,
    pub end: usize,
}

impl HeadingSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Locate every numbered heading in `text`, in order of appearance
///
/// Scanning resumes right after each heading rather than at the end of the
/// line, so several headings flattened onto one line are all found.
pub fn find_headings(text: &str) -> Vec<HeadingSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(candidate) = HEADING_CANDIDATE.find_at(text, pos) {
        let end = candidate.start() + heading_len(candidate.as_str());
        spans.push(HeadingSpan {
            start: candidate.start(),
            end,
        });
        pos = end;
    }

    spans
}

/// Length in bytes of the heading at the start of a candidate line
///
/// An all-caps title ("1. INTRODUÇÃO texto") ends before the first word that
/// has a lowercase letter, or before a one-letter word that opens a sentence
/// ("1. INTRODUÇÃO O protocolo"). Any other title runs to the end of the
/// line. Either way a title stops where the next numbered heading begins.
fn heading_len(candidate: &str) -> usize {
    let Some(title_at) = candidate.find(' ').map(|i| i + 1) else {
        return candidate.len();
    };
    let title = &candidate[title_at..];
    let words: Vec<_> = WORD.find_iter(title).collect();

    let shouting = words
        .first()
        .is_some_and(|first| is_shouted(first.as_str()) && letter_count(first.as_str()) >= 2);
    if !shouting {
        let line_end = HEADING_CANDIDATE
            .find_at(candidate, title_at)
            .map_or(candidate.len(), |next| next.start());
        return candidate[..line_end].trim_end().len();
    }

    let mut end = 0;
    for (i, word) in words.iter().enumerate() {
        let text = word.as_str();
        if !is_shouted(text) || (i > 0 && HEADING_START.is_match(&title[word.start()..])) {
            break;
        }
        let opens_sentence = letter_count(text) == 1
            && words
                .get(i + 1)
                .is_some_and(|next| !is_shouted(next.as_str()));
        if i > 0 && opens_sentence {
            break;
        }
        end = word.end();
    }
    title_at + end
}

fn is_shouted(word: &str) -> bool {
    !word.chars().any(char::is_lowercase)
}

fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| c.is_alphabetic()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(text: &str) -> Vec<&str> {
        find_headings(text)
            .into_iter()
            .map(|span| &text[span.range()])
            .collect()
    }

    #[test]
    fn test_all_caps_heading_stops_at_body() {
        assert_eq!(
            headings("1. INTRODUÇÃO texto aqui 2. TRATAMENTO mais texto"),
            vec!["1. INTRODUÇÃO", "2. TRATAMENTO"]
        );
    }

    #[test]
    fn test_all_caps_heading_spans_words() {
        assert_eq!(
            headings("3. TRATAMENTO DA DENGUE\nhidratação oral"),
            vec!["3. TRATAMENTO DA DENGUE"]
        );
    }

    #[test]
    fn test_title_case_heading_runs_to_line_end() {
        assert_eq!(
            headings("4. Diagnóstico diferencial \ncorpo"),
            vec!["4. Diagnóstico diferencial"]
        );
    }

    #[test]
    fn test_accented_uppercase_start() {
        assert_eq!(headings("5. ÉTICA\nx"), vec!["5. ÉTICA"]);
    }

    #[test]
    fn test_requires_space_and_uppercase() {
        assert!(headings("dose de 1.5 mg").is_empty());
        assert!(headings("1.TRATAMENTO").is_empty());
        assert!(headings("1. tratamento").is_empty());
    }

    #[test]
    fn test_digits_inside_word_are_not_headings() {
        assert!(headings("versão v2. NOVA").is_empty());
    }

    #[test]
    fn test_adjacent_headings_on_one_line() {
        assert_eq!(
            headings("1. ANEXOS 2. REFERÊNCIAS Brasil, 2024."),
            vec!["1. ANEXOS", "2. REFERÊNCIAS"]
        );
    }

    #[test]
    fn test_title_case_heading_stops_at_next_heading() {
        assert_eq!(
            headings("1. Anexos 2. Referências bibliográficas"),
            vec!["1. Anexos", "2. Referências bibliográficas"]
        );
    }

    #[test]
    fn test_leading_article_is_not_part_of_heading() {
        assert_eq!(
            headings("1. INTRODUÇÃO O protocolo 2. TRATAMENTO E cuidados"),
            vec!["1. INTRODUÇÃO", "2. TRATAMENTO"]
        );
    }

    #[test]
    fn test_trailing_single_letter_stays_in_heading() {
        assert_eq!(headings("4. HEPATITE A\ncorpo"), vec!["4. HEPATITE A"]);
        assert_eq!(
            headings("4. HEPATITE A DO ADULTO"),
            vec!["4. HEPATITE A DO ADULTO"]
        );
    }

    #[test]
    fn test_heading_at_end_of_text() {
        assert_eq!(headings("fim 2. ÉTICA"), vec!["2. ÉTICA"]);
        assert_eq!(headings("1. É"), vec!["1. É"]);
    }

    #[test]
    fn test_single_letter_title_is_not_all_caps_mode() {
        assert_eq!(headings("6. A dengue grave\nx"), vec!["6. A dengue grave"]);
    }
}
