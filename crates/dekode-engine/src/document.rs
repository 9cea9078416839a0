//! Document assembly — the final, self-contained HTML string.
//!
//! Pure string emission, no parsing: the colorized markup is split on
//! newlines and wrapped line by line inside a window-chrome frame (control
//! dots, language label, optional line-number gutter). The three baseline
//! colors of the style map drive the stylesheet; everything else is fixed
//! layout. The result renders standalone and screenshots cleanly.

use std::fmt::Write;

use dekode_theme::StyleMap;

use crate::language::Language;
use crate::options::FormatOptions;

/// Assemble the complete HTML document around colorized code.
#[must_use]
pub fn render(
    colorized: &str,
    language: Language,
    map: &StyleMap,
    options: &FormatOptions,
) -> String {
    let lines: Vec<&str> = colorized.split('\n').collect();
    let label = language.name().to_ascii_uppercase();

    let mut html = String::with_capacity(colorized.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(html, "<title>Code Image - {label}</title>");

    write_stylesheet(&mut html, map, options);

    html.push_str("</head>\n<body>\n<div class=\"code-container\">\n");

    // Window chrome: control dots plus the language label.
    html.push_str("<div class=\"code-header\">\n");
    html.push_str(concat!(
        "<div class=\"window-controls\">",
        "<span class=\"window-button close\"></span>",
        "<span class=\"window-button minimize\"></span>",
        "<span class=\"window-button zoom\"></span>",
        "</div>\n",
    ));
    let _ = writeln!(html, "<strong>Language:</strong> {label}");
    html.push_str("</div>\n");

    html.push_str("<div class=\"code-content\">\n");

    if options.line_numbers {
        html.push_str("<div class=\"line-numbers\">");
        for number in 1..=lines.len() {
            if number > 1 {
                html.push('\n');
            }
            let _ = write!(html, "{number}");
        }
        html.push_str("</div>\n");
    }

    html.push_str("<div class=\"code-lines\">");
    for line in &lines {
        // An empty line still needs content to keep its height.
        let content = if line.is_empty() { " " } else { line };
        let _ = writeln!(html, "<span class=\"line\">{content}</span>");
    }
    html.push_str("</div>\n");

    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Emit the `<style>` block driven by the theme baselines and options.
fn write_stylesheet(html: &mut String, map: &StyleMap, options: &FormatOptions) {
    html.push_str("<style>\n");
    let _ = writeln!(
        html,
        "body {{ margin: 0; padding: 20px; \
         font-family: 'Consolas', 'Monaco', 'Courier New', monospace; \
         background-color: {}; color: {}; line-height: 1.5; }}",
        map.background, map.foreground
    );
    html.push_str(
        ".code-container { border-radius: 8px; overflow: hidden; \
         box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3); }\n",
    );
    html.push_str(
        ".code-header { background-color: rgba(255, 255, 255, 0.1); \
         padding: 10px 15px; font-size: 14px; \
         border-bottom: 1px solid rgba(255, 255, 255, 0.1); \
         display: flex; align-items: center; gap: 8px; }\n",
    );
    html.push_str(".window-controls { display: flex; gap: 8px; }\n");
    html.push_str(".window-button { width: 12px; height: 12px; border-radius: 50%; }\n");
    html.push_str(".window-button.close { background: #ff5f57; }\n");
    html.push_str(".window-button.minimize { background: #ffbd2e; }\n");
    html.push_str(".window-button.zoom { background: #28ca42; }\n");
    html.push_str(".code-content { display: flex; overflow-x: auto; }\n");
    let _ = writeln!(
        html,
        ".line-numbers {{ background-color: rgba(0, 0, 0, 0.2); \
         padding: 20px 10px; text-align: right; color: {}; \
         user-select: none; min-width: 40px; font-size: 14px; \
         white-space: pre; }}",
        map.line_number
    );
    html.push_str(
        ".code-lines { padding: 20px; flex: 1; white-space: pre; \
         font-size: 14px; overflow-x: auto; }\n",
    );
    html.push_str(".line { display: block; min-height: 1.5em; }\n");
    if options.wrap_code {
        html.push_str(".code-lines { white-space: pre-wrap; }\n");
    }
    html.push_str("</style>\n");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
