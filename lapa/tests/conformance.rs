// Break test cases from the Unicode Character Database, matching the
// Unicode version of the icu_properties data (16.0).

use lapa::{
    first_grapheme_cluster, first_line_segment, first_sentence, first_word, step, Boundaries,
    GraphemeCursor, LineBreak, LineCursor, SentenceCursor, StepCursor, WordCursor,
};
use pretty_assertions::assert_eq;

const GRAPHEME_BREAK_TEST: &str = include_str!("data/GraphemeBreakTest.txt");
const WORD_BREAK_TEST: &str = include_str!("data/WordBreakTest.txt");
const SENTENCE_BREAK_TEST: &str = include_str!("data/SentenceBreakTest.txt");
const LINE_BREAK_TEST: &str = include_str!("data/LineBreakTest.txt");

struct Case<'a> {
    source: &'a str,
    text: String,
    /// Byte offsets of every boundary after the start of the text.
    breaks: Vec<usize>,
}

fn cases(data: &str) -> Vec<Case<'_>> {
    data.lines()
        .filter_map(|line| {
            let source = line.split('#').next().unwrap_or_default().trim();
            if source.is_empty() {
                return None;
            }

            let mut text = String::new();
            let mut breaks = Vec::new();
            for token in source.split_whitespace() {
                match token {
                    "÷" if !text.is_empty() => breaks.push(text.len()),
                    "÷" | "×" => {},
                    hex => {
                        let code = u32::from_str_radix(hex, 16).unwrap();
                        text.push(char::from_u32(code).unwrap());
                    },
                }
            }
            Some(Case { source, text, breaks })
        })
        .collect()
}

fn ends_by(text: &str, mut split: impl FnMut(&str) -> (usize, &str)) -> Vec<usize> {
    let mut out = Vec::new();
    let mut rest = text;
    let mut offset = 0;
    while !rest.is_empty() {
        let (len, next) = split(rest);
        offset += len;
        out.push(offset);
        rest = next;
    }
    out
}

/// End offset and flags of every cluster produced by [`step`].
fn steps(text: &str) -> Vec<(usize, Boundaries)> {
    let mut out = Vec::new();
    let mut rest = text;
    let mut cursor = StepCursor::START;
    let mut offset = 0;
    while !rest.is_empty() {
        let (cluster, next, boundaries, next_cursor) = step(rest, cursor);
        offset += cluster.len();
        out.push((offset, boundaries));
        rest = next;
        cursor = next_cursor;
    }
    out
}

/// Checks one of the boundary flags reported by [`step`] against the
/// expected breaks. Every expected break must fall on a cluster boundary.
fn check_steps(case: &Case<'_>, flag: impl Fn(Boundaries) -> bool) {
    let steps = steps(&case.text);
    for offset in &case.breaks {
        assert!(
            steps.iter().any(|(end, _)| end == offset),
            "{}: no cluster ends at {offset}",
            case.source
        );
    }
    for (offset, boundaries) in steps {
        assert_eq!(
            flag(boundaries),
            case.breaks.contains(&offset),
            "{}: at byte {offset}",
            case.source
        );
    }
}

#[test]
fn grapheme_break_test() {
    let cases = cases(GRAPHEME_BREAK_TEST);
    assert!(!cases.is_empty());
    for case in cases {
        let mut cursor = GraphemeCursor::START;
        let ends = ends_by(&case.text, |rest| {
            let (cluster, next, _, next_cursor) = first_grapheme_cluster(rest, cursor);
            cursor = next_cursor;
            (cluster.len(), next)
        });
        assert_eq!(ends, case.breaks, "{}", case.source);

        let step_ends: Vec<usize> = steps(&case.text).into_iter().map(|(end, _)| end).collect();
        assert_eq!(step_ends, case.breaks, "{}", case.source);
    }
}

#[test]
fn word_break_test() {
    for case in cases(WORD_BREAK_TEST) {
        let mut cursor = WordCursor::START;
        let ends = ends_by(&case.text, |rest| {
            let (word, next, next_cursor) = first_word(rest, cursor);
            cursor = next_cursor;
            (word.len(), next)
        });
        assert_eq!(ends, case.breaks, "{}", case.source);
        check_steps(&case, Boundaries::is_word_boundary);
    }
}

#[test]
fn sentence_break_test() {
    for case in cases(SENTENCE_BREAK_TEST) {
        let mut cursor = SentenceCursor::START;
        let ends = ends_by(&case.text, |rest| {
            let (sentence, next, next_cursor) = first_sentence(rest, cursor);
            cursor = next_cursor;
            (sentence.len(), next)
        });
        assert_eq!(ends, case.breaks, "{}", case.source);
        check_steps(&case, Boundaries::is_sentence_boundary);
    }
}

#[test]
fn line_break_test() {
    for case in cases(LINE_BREAK_TEST) {
        let mut cursor = LineCursor::START;
        let ends = ends_by(&case.text, |rest| {
            let (segment, next, _, next_cursor) = first_line_segment(rest, cursor);
            cursor = next_cursor;
            (segment.len(), next)
        });
        assert_eq!(ends, case.breaks, "{}", case.source);
        check_steps(&case, |boundaries| boundaries.line_break() != LineBreak::Dont);
    }
}
