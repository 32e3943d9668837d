use crate::style::Style;

/// Format one heading line, e.g. `===Etymology===`.
///
/// `title` is inserted as-is, so it may be a macro such as `{{etym}}`.
/// With `empty_line_after_headings` the fragment ends in a line break, which
/// turns into a blank line once the page lines are joined.
pub fn format_heading(level: usize, title: &str, style: &Style) -> String {
    let marks = "=".repeat(level);
    let pad = if style.space_in_headings { " " } else { "" };

    let mut heading = format!("{marks}{pad}{title}{pad}{marks}");
    if style.empty_line_after_headings {
        heading.push('\n');
    }
    heading
}

/// Whether a blank line goes in front of a heading. The first section of a
/// page never gets one.
pub fn needs_blank_before(style: &Style, is_first_section: bool) -> bool {
    style.empty_line_before_headings && !is_first_section
}
