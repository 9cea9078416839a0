//! Cosmetic re-indentation — a bracket-depth heuristic.
//!
//! Re-flows leading whitespace from scratch: every line is trimmed, then
//! prefixed with one indent unit per open bracket depth. A line that opens
//! a block (trailing `{`, `(`, `[`) raises the depth for the lines after
//! it; a line that closes one (leading `}`, `)`, `]`) lowers it for
//! itself.
//!
//! This is deliberately language-agnostic: it never consults a grammar, so
//! brackets inside multi-line strings or block comments skew the depth
//! counter. Known limitation — the output is a best-effort cosmetic
//! layout, not a formatter-grade one.

/// Re-indent `code`, prefixing `unit` once per bracket depth level.
#[must_use]
pub fn reindent(code: &str, unit: &str) -> String {
    let mut depth: usize = 0;

    let lines: Vec<String> = code
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }

            if trimmed.starts_with(['}', ')', ']']) {
                depth = depth.saturating_sub(1);
            }

            let indented = format!("{}{}", unit.repeat(depth), trimmed);

            if opens_block(trimmed) {
                depth += 1;
            }

            indented
        })
        .collect();

    lines.join("\n")
}

/// Whether a trimmed line opens a block: ends with an opening bracket and
/// is not a line comment.
fn opens_block(line: &str) -> bool {
    line.ends_with(['{', '(', '[']) && !line.starts_with("//")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flat_code_unchanged() {
        assert_eq!(reindent("let x = 1;", "  "), "let x = 1;");
    }

    #[test]
    fn single_block() {
        let input = "function f() {\nreturn 1;\n}";
        let expected = "function f() {\n  return 1;\n}";
        assert_eq!(reindent(input, "  "), expected);
    }

    #[test]
    fn nested_blocks() {
        let input = "a {\nb {\nc;\n}\nd;\n}";
        let expected = "a {\n  b {\n    c;\n  }\n  d;\n}";
        assert_eq!(reindent(input, "  "), expected);
    }

    #[test]
    fn idempotent_on_well_indented_code() {
        let code = "function f() {\n  if (x) {\n    y();\n  }\n}";
        assert_eq!(reindent(code, "  "), code);
    }

    #[test]
    fn discards_existing_indentation() {
        let input = "        let x = 1;";
        assert_eq!(reindent(input, "  "), "let x = 1;");
    }

    #[test]
    fn empty_lines_stay_empty() {
        let input = "a {\n\nb;\n}";
        let expected = "a {\n\n  b;\n}";
        assert_eq!(reindent(input, "  "), expected);
    }

    #[test]
    fn empty_line_does_not_touch_depth() {
        let input = "a {\n\n\nb;\n}";
        assert_eq!(reindent(input, "  "), "a {\n\n\n  b;\n}");
    }

    #[test]
    fn depth_floors_at_zero() {
        // Unbalanced closers must not underflow.
        let input = "}\n}\ncode;";
        assert_eq!(reindent(input, "  "), "}\n}\ncode;");
    }

    #[test]
    fn line_comment_does_not_open_block() {
        let input = "// starts a block {\nx;";
        assert_eq!(reindent(input, "  "), "// starts a block {\nx;");
    }

    #[test]
    fn parens_and_squares_count() {
        let input = "call(\narg,\n)";
        assert_eq!(reindent(input, "  "), "call(\n  arg,\n)");

        let input = "[\n1,\n2,\n]";
        assert_eq!(reindent(input, "  "), "[\n  1,\n  2,\n]");
    }

    #[test]
    fn tabs_as_unit() {
        let input = "a {\nb;\n}";
        assert_eq!(reindent(input, "\t"), "a {\n\tb;\n}");
    }

    #[test]
    fn closer_line_outdents_itself() {
        // The closing line sits at the outer depth, not the inner one.
        let input = "if (x) {\ny();\n} else {\nz();\n}";
        let expected = "if (x) {\n  y();\n} else {\n  z();\n}";
        assert_eq!(reindent(input, "  "), expected);
    }

    #[test]
    fn empty_input() {
        assert_eq!(reindent("", "  "), "");
    }
}
