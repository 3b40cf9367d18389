use super::fields::{MetricField, METRIC_FIELDS, NOTES_KEY};
use crate::metrics::MetricKind;

fn describe(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Loc => "executable lines, excluding comments, blank lines and includes",
        MetricKind::C1 => "cyclomatic complexity, decision points + 1, at least 1",
        MetricKind::C2 => "cognitive complexity score, at least 0",
        MetricKind::C3 => "Halstead-style complexity score, at least 0",
    }
}

fn schema(fields: &[MetricField]) -> String {
    let mut lines: Vec<String> = fields
        .iter()
        .map(|f| format!("  \"{}\": <integer: {}>,", f.canonical, describe(f.kind)))
        .collect();
    lines.push(format!("  \"{NOTES_KEY}\": [<short observation>, ...]"));
    format!("{{\n{}\n}}", lines.join("\n"))
}

/// Instruction text sent to the AI provider for one C source file.
///
/// Asks for a bare JSON object with the canonical keys from [`METRIC_FIELDS`].
pub fn build_prompt(source: &str) -> String {
    format!(
        "You analyze the complexity of C source code.\n\
         Reply with a single JSON object and nothing else: no prose, no Markdown fences.\n\
         Use exactly these keys. Every number must be an integer.\n\
         \n\
         {}\n\
         \n\
         C source:\n\
         {}\n",
        schema(&METRIC_FIELDS),
        source
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_canonical_keys() {
        let prompt = build_prompt("int main(void) { return 0; }");
        for key in ["\"loc\"", "\"complexity1\"", "\"complexity2\"", "\"complexity3\"", "\"notes\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.ends_with("int main(void) { return 0; }\n"));
    }
}
