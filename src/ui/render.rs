use minijinja::Environment;
use serde::Serialize;

use super::state::Page;
use crate::core::models::Flashcard;
use crate::errors::PageError;

const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct PageView<'a> {
    input_text: &'a str,
    summary: &'a str,
    flashcards: &'a [Flashcard],
    flashcards_json: String,
    show_summary: bool,
    show_flashcards: bool,
    summary_loading: bool,
    flashcards_loading: bool,
    summary_error: Option<&'a str>,
    flashcards_error: Option<&'a str>,
}

/// Renders the page as a complete HTML document.
///
/// The `.html` template name turns on HTML autoescaping for every value.
pub fn render_page(page: &Page) -> Result<String, PageError> {
    let flashcards = page.flashcards().value();
    let view = PageView {
        input_text: page.input_text(),
        summary: page.summary().value(),
        flashcards,
        flashcards_json: serde_json::to_string(flashcards)
            .map_err(|e| PageError::Template(e.to_string()))?,
        show_summary: page.shows_summary(),
        show_flashcards: page.shows_flashcards(),
        summary_loading: page.summary().is_loading(),
        flashcards_loading: page.flashcards().is_loading(),
        summary_error: page.summary().error(),
        flashcards_error: page.flashcards().error(),
    };

    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    let template = env.get_template(PAGE_TEMPLATE_NAME)?;
    Ok(template.render(&view)?)
}
