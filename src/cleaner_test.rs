// Tests for TranscriptCleaner
// Test cases:
// - Each removal rule strips its annotation pattern
// - Markup-only lines contribute no line to the output
// - Stopword removal is case-insensitive
// - Cleaning is idempotent once markup is removed
// - Mismatched delimiters are best-effort, not an error

use super::*;

fn make_cleaner() -> TranscriptCleaner {
    TranscriptCleaner::new(StopwordSet::default())
}

#[test]
fn test_metadata_header_lines_dropped() {
    let cleaner = make_cleaner();
    assert_eq!(cleaner.clean("@Begin\n@Participants: SPK\nhello world"), "hello world");
}

#[test]
fn test_speaker_tag_and_square_span_removed() {
    let cleaner = make_cleaner();
    // speaker tag and bracketed annotation go; "there" is not a stopword
    assert_eq!(cleaner.clean("*SPK: Hello there! [laughs]"), "Hello there!");
}

#[test]
fn test_double_paren_and_angle_spans_removed() {
    let cleaner = make_cleaner();
    assert_eq!(cleaner.clean("so ((coughs)) good <gesture> day"), "so good day");
}

#[test]
fn test_dependent_tier_contributes_no_line() {
    let cleaner = make_cleaner();
    assert_eq!(cleaner.clean("%com: test"), "");
    assert_eq!(cleaner.clean("%com: test\nhello"), "hello");
}

#[test]
fn test_multiple_spans_within_one_line() {
    let cleaner = make_cleaner();
    // rules are independent; all matches in the line are removed
    assert_eq!(cleaner.clean("[x] hello <y> world ((z))"), "hello world");
}

#[test]
fn test_stopword_removal_is_case_insensitive() {
    let cleaner = make_cleaner();
    assert_eq!(cleaner.clean("The dog and THE cat"), "dog cat");
}

#[test]
fn test_empty_and_markup_only_lines_dropped() {
    let cleaner = make_cleaner();
    let input = "@Begin\n\n*SPK: hello\n%mor: n|x\n*SPK: world\n@End";
    assert_eq!(cleaner.clean(input), "hello\nworld");
}

#[test]
fn test_clean_is_idempotent() {
    let cleaner = make_cleaner();
    let input = "*SPK: Hello there! [laughs]\n%com: off topic\nplain words here";

    let once = cleaner.clean(input);
    let twice = cleaner.clean(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_mismatched_delimiters_are_best_effort() {
    let cleaner = make_cleaner();
    // no closing bracket, so nothing is stripped; documented limitation
    assert_eq!(cleaner.clean("[unclosed span"), "[unclosed span");
}
