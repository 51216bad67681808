//! Presentational highlighting of engine output
//!
//! Rewrites each recognized marker prefix as a colored bold HTML label and
//! wraps the whole buffer in a whitespace-preserving container. Everything
//! that is not a marker prefix, including the entity value and its closing
//! `>`, passes through verbatim.

use crate::marker::{self, Segment};
use std::fmt::Write;

/// Opening tag of the whitespace-preserving display container
pub const CONTAINER_OPEN: &str = "<div style=\"white-space: pre-wrap;\">";

/// Closing tag of the display container
pub const CONTAINER_CLOSE: &str = "</div>";

/// Render engine output as highlighted HTML
///
/// Marker-free text is returned unchanged apart from the container.
pub fn render(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + CONTAINER_OPEN.len() + CONTAINER_CLOSE.len());
    out.push_str(CONTAINER_OPEN);
    render_fragment(&mut out, text);
    out.push_str(CONTAINER_CLOSE);
    out
}

fn render_fragment(out: &mut String, text: &str) {
    for segment in marker::scan(text) {
        match segment {
            Segment::Text(run) => out.push_str(run),
            Segment::Marker(category) => {
                // String::write_fmt is infallible
                let _ = write!(
                    out,
                    "<span style=\"color: {}\"><b>{}</b></span>",
                    category.color(),
                    category.html_label()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_free_text_is_unchanged_inside_container() {
        let text = "The quick brown fox.\nSecond line.";
        let html = render(text);
        assert_eq!(html, format!("{CONTAINER_OPEN}{text}{CONTAINER_CLOSE}"));
    }

    #[test]
    fn phone_number_prefix_becomes_red_bold_label() {
        let html = render("Call <PHONE_NUMBER:1> now");
        assert!(html.contains("<span style=\"color: red\"><b>&lt;PHONE NUMBER:</b></span>"));
        assert!(html.contains("1> now"));
        assert!(!html.contains("<PHONE_NUMBER:"));
    }

    #[test]
    fn generic_token_is_replaced_wholesale() {
        let html = render("<PII>");
        assert!(html.contains("<span style=\"color: orange\"><b>****</b></span>"));
        assert!(!html.contains("<PII>"));
    }

    #[test]
    fn each_category_gets_its_own_color() {
        let html = render("<PERSON:a> <LOCATION:b> <PHONE_NUMBER:c> <EMAIL_ADDRESS:d>");
        assert!(html.contains("color: blue\"><b>&lt;PERSON:"));
        assert!(html.contains("color: green\"><b>&lt;LOCATION:"));
        assert!(html.contains("color: red\"><b>&lt;PHONE NUMBER:"));
        assert!(html.contains("color: orange\"><b>&lt;EMAIL ADDRESS:"));
    }

    #[test]
    fn empty_input_renders_empty_container() {
        assert_eq!(render(""), format!("{CONTAINER_OPEN}{CONTAINER_CLOSE}"));
    }
}
