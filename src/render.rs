//! Renderer: typed lines back to their textual form.

use crate::line::Line;

/// Render a single line back to text.
pub fn render(line: &Line) -> String {
    match line {
        Line::Section { text } => text.clone(),
        Line::Comment { text, .. } => text.clone(),
        Line::Empty { .. } => String::new(),
        Line::Config {
            key,
            value,
            inline_comment,
            ..
        } => match inline_comment {
            Some(comment) => format!("{}={}{}", key, value, comment),
            None => format!("{}={}", key, value),
        },
    }
}

/// Render a merged sequence in order.
pub fn render_lines(lines: &[Line]) -> Vec<String> {
    lines.iter().map(render).collect()
}
