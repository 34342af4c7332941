//! Console rendering for the native build.
//!
//! Mirrors each region write onto stdout so the CLI shows the same output
//! the page would, minus the markup.

use super::{Region, Section, ViewSink};

/// Prints region writes, labelled by the region's element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl ViewSink for ConsoleView {
    fn set_text(&self, region: Region, text: &str) {
        println!("[{}] {}", region.element_id(), text);
    }

    fn set_markup(&self, region: Region, markup: &str) {
        println!("[{}]", region.element_id());
        for line in strip_markup(markup)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
        {
            println!("  {line}");
        }
    }

    fn reveal(&self, section: Section) {
        log::debug!("section {} now visible", section.element_id());
    }
}

/// Drop tags from in-crate markup. The generator never puts angle brackets
/// inside attribute values, so a flat scan is enough.
fn strip_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;

    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::strip_markup;

    #[test]
    fn tags_are_dropped_text_kept() {
        let markup = "<h3>Rust</h3>\n<p><strong>Instructor:</strong> Ada</p>";
        assert_eq!(strip_markup(markup), "Rust\nInstructor: Ada");
    }
}
