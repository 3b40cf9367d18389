/// Maximum brace nesting depth of `source`.
///
/// `{` opens a level and `}` closes one. Unbalanced closing braces never take
/// the running depth below zero, so a stray `}` does not hide later nesting.
pub fn max_nesting_depth(source: &str) -> u32 {
    let (_, max_depth) = source.chars().fold((0u32, 0u32), |(depth, max_depth), ch| match ch {
        '{' => (depth + 1, max_depth.max(depth + 1)),
        '}' => (depth.saturating_sub(1), max_depth),
        _ => (depth, max_depth),
    });
    max_depth
}
