//! Lexical locators for the rule checks: function bodies, switch blocks and
//! per-line pattern hits. Braces are matched textually, so braces inside
//! literals or comments can shift a body's end.

use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|\n)[ \t\r]*(?:[A-Za-z_][\w\s\*\(\)]*?\s+)?([A-Za-z_]\w*)\s*\((?:[^;{}()]|\([^)]*\))*\)\s*\{",
    )
    .unwrap()
});

static SWITCH_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)switch\s*\((?:[^;{}()]|\([^)]*\))*\)\s*\{").unwrap()
});

static SWITCH_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(case(?-u:\b)[^:]*|default)\s*:").unwrap());

/// Statements that look like `name (...) {` but are not definitions
const NOT_FUNCTIONS: &[&str] = &["if", "for", "while", "switch", "return", "sizeof", "else"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan<'a> {
    pub name: &'a str,
    /// 1-based line of the function name
    pub line: usize,
    /// Text between the outer braces
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchLabel {
    Case,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBlock {
    pub line: usize,
    pub labels: Vec<SwitchLabel>,
}

impl SwitchBlock {
    pub fn has_default(&self) -> bool {
        self.labels.contains(&SwitchLabel::Default)
    }

    pub fn default_is_last(&self) -> bool {
        self.labels.last() == Some(&SwitchLabel::Default)
    }
}

/// A pattern hit on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit<'a> {
    pub line: usize,
    pub text: &'a str,
    /// First capture group when the pattern has one, else the whole match
    pub matched: &'a str,
}

/// 1-based line number of byte offset `offset`
pub fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

/// Byte offset just past the brace that closes the one at `open`
pub fn balanced_end(text: &str, open: usize) -> Option<usize> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, byte) in text.bytes().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Function definitions at the top level of `source`, in order
pub fn functions(source: &str) -> Vec<FunctionSpan<'_>> {
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(caps) = FUNCTION_HEAD.captures_at(source, from) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let open = whole.end() - 1;
        let Some(end) = balanced_end(source, open) else {
            from = whole.end();
            continue;
        };

        if NOT_FUNCTIONS.contains(&name.as_str()) {
            from = whole.end();
            continue;
        }

        found.push(FunctionSpan {
            name: name.as_str(),
            line: line_of(source, name.start()),
            body: &source[whole.end()..end - 1],
        });
        from = end;
    }

    found
}

/// Every `switch (...) {` block, nested ones included
pub fn switches(source: &str) -> Vec<SwitchBlock> {
    SWITCH_HEAD
        .find_iter(source)
        .filter_map(|head| {
            let end = balanced_end(source, head.end() - 1)?;
            let body = &source[head.end()..end - 1];
            let labels = SWITCH_LABEL
                .captures_iter(body)
                .filter_map(|caps| caps.get(1))
                .map(|label| {
                    if label.as_str().starts_with("default") {
                        SwitchLabel::Default
                    } else {
                        SwitchLabel::Case
                    }
                })
                .collect();
            Some(SwitchBlock {
                line: line_of(source, head.start()),
                labels,
            })
        })
        .collect()
}

/// Each match of `pattern` on each line of `source`
pub fn line_hits<'a>(source: &'a str, pattern: &Regex) -> Vec<LineHit<'a>> {
    source
        .lines()
        .enumerate()
        .flat_map(move |(index, text)| {
            pattern.captures_iter(text).filter_map(move |caps| {
                let matched = caps.get(1).or_else(|| caps.get(0))?;
                Some(LineHit {
                    line: index + 1,
                    text,
                    matched: matched.as_str(),
                })
            })
        })
        .collect()
}
