//! Text statistics
//!
//! Counts characters, lines, words and sentences, with enough CJK
//! awareness to give sane numbers for mixed-language text: CJK ideographs
//! are counted separately from ASCII letters, and CJK sentence-ending
//! punctuation terminates sentences just like `.!?`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Words are maximal ASCII-letter runs on word boundaries; "abc123" is
/// not a word, "hello" inside punctuation is.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]+\b").unwrap());

/// How many entries `top_words` keeps.
pub const TOP_WORDS: usize = 10;

/// CJK punctuation treated as punctuation rather than ordinary symbols.
const CJK_PUNCTUATION: &str = "，。！？；：、“”‘’（）《》【】…—·";

/// Everything `analyze` measures about a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    pub lines: usize,
    pub non_empty_lines: usize,
    /// All characters, whitespace included.
    pub chars: usize,
    pub chars_no_whitespace: usize,
    /// ASCII letters.
    pub letters: usize,
    pub digits: usize,
    pub whitespace: usize,
    /// CJK unified ideographs.
    pub cjk_chars: usize,
    pub punctuation: usize,
    pub words: usize,
    pub sentences: usize,
    pub avg_chars_per_line: f64,
    pub avg_words_per_sentence: f64,
    /// Most frequent words, count descending then alphabetical.
    pub top_words: Vec<(String, usize)>,
}

/// Compute the full statistics report for `text`.
pub fn analyze(text: &str) -> TextReport {
    let lines = if text.is_empty() { 0 } else { text.lines().count() };
    let non_empty_lines = text.lines().filter(|l| !l.trim().is_empty()).count();

    let mut chars = 0usize;
    let mut chars_no_whitespace = 0usize;
    let mut letters = 0usize;
    let mut digits = 0usize;
    let mut whitespace = 0usize;
    let mut cjk_chars = 0usize;
    let mut punctuation = 0usize;

    for c in text.chars() {
        chars += 1;
        if c.is_whitespace() {
            whitespace += 1;
        } else {
            chars_no_whitespace += 1;
        }
        if c.is_ascii_alphabetic() {
            letters += 1;
        } else if c.is_ascii_digit() {
            digits += 1;
        } else if is_cjk(c) {
            cjk_chars += 1;
        }
        if c.is_ascii_punctuation() || CJK_PUNCTUATION.contains(c) {
            punctuation += 1;
        }
    }

    let lowered = text.to_lowercase();
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    let mut words = 0usize;
    for word in WORD_PATTERN.find_iter(&lowered) {
        words += 1;
        *frequencies.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut top_words: Vec<(String, usize)> = frequencies
        .into_iter()
        .map(|(w, n)| (w.to_string(), n))
        .collect();
    top_words.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_words.truncate(TOP_WORDS);

    let sentences = count_sentences(text);

    TextReport {
        lines,
        non_empty_lines,
        chars,
        chars_no_whitespace,
        letters,
        digits,
        whitespace,
        cjk_chars,
        punctuation,
        words,
        sentences,
        avg_chars_per_line: average(chars, lines),
        avg_words_per_sentence: average(words, sentences),
        top_words,
    }
}

/// CJK unified ideographs, the common block.
fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '！' | '？')
}

/// Sentences are runs of non-terminator text holding at least one
/// non-whitespace character.
fn count_sentences(text: &str) -> usize {
    text.split(is_sentence_end)
        .filter(|part| !part.trim().is_empty())
        .count()
}

fn average(total: usize, parts: usize) -> f64 {
    if parts == 0 {
        0.0
    } else {
        total as f64 / parts as f64
    }
}
