//! Lines of code (LOC) counting for C sources
//!
//! A line is *testable* (counted as code) when its trimmed text is non-empty,
//! is not a comment line and is not made only of braces and semicolons.
//!
//! # Line Categories
//!
//! - **Code Lines**: testable lines, reported as `loc`
//! - **Comment Lines**: trimmed text starts with `//`, `/*` or `*`
//! - **Blank Lines**: lines containing only whitespace
//! - **Punctuation Lines**: lines such as `{`, `}`, `;`, `{}` or `};`
//!
//! The invariant
//! `physical_lines == code_lines + comment_lines + blank_lines + punctuation_lines`
//! always holds.
//!
//! ## Limitations
//!
//! Comment detection is a per-line heuristic. Block comments are not tracked
//! across lines, so a line inside `/* ... */` that does not itself start with
//! `*` or `/*` is counted as code. A statement such as `*ptr = 0;` is counted as
//! a comment line for the same reason.

/// Per-line classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Blank,
    Comment,
    Punctuation,
    Code,
}

/// Line counts for a single source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocCount {
    /// Raw line count
    pub physical_lines: usize,
    /// Testable lines
    pub code_lines: usize,
    /// Lines starting with a comment marker
    pub comment_lines: usize,
    /// Lines containing only whitespace
    pub blank_lines: usize,
    /// Lines made only of `{`, `}` and `;`
    pub punctuation_lines: usize,
}

impl LocCount {
    /// Lines counted toward `loc`.
    pub fn loc(&self) -> usize {
        self.code_lines
    }
}

/// Counts lines of code using the testable-line rules.
///
/// # Examples
///
/// ```rust
/// use cai_check::metrics::loc_counter::LocCounter;
///
/// let count = LocCounter::new().count_content("int x;\n{\n// note\n");
/// assert_eq!(count.loc(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocCounter;

impl LocCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count lines in source text (pure function)
    pub fn count_content(&self, content: &str) -> LocCount {
        content
            .lines()
            .map(classify_line)
            .fold(LocCount::default(), |mut count, line_type| {
                count.physical_lines += 1;
                match line_type {
                    LineType::Blank => count.blank_lines += 1,
                    LineType::Comment => count.comment_lines += 1,
                    LineType::Punctuation => count.punctuation_lines += 1,
                    LineType::Code => count.code_lines += 1,
                }
                count
            })
    }
}

/// Count testable lines in `content`.
pub fn count_loc(content: &str) -> usize {
    LocCounter::new().count_content(content).loc()
}

/// Classify a single raw line (surrounding whitespace is ignored)
pub fn classify_line(line: &str) -> LineType {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineType::Blank
    } else if is_comment_line(trimmed) {
        LineType::Comment
    } else if is_punctuation_only(trimmed) {
        LineType::Punctuation
    } else {
        LineType::Code
    }
}

/// Whether a raw line counts toward `loc`
pub fn is_testable_line(line: &str) -> bool {
    classify_line(line) == LineType::Code
}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn is_punctuation_only(trimmed: &str) -> bool {
    trimmed.chars().all(|c| matches!(c, '{' | '}' | ';'))
}
