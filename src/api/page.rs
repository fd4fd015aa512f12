//! Serves the page: `GET /` draws it, `POST /` runs the submitted action.

use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use crate::clients::WorkerClient;
use crate::form_parser::parse_page_form;
use crate::ui::{LocalRelay, Page, render_page};

pub async fn handle_page(worker: &WorkerClient, method: &str, body: Option<&str>) -> Value {
    let page = match method {
        "GET" => Page::new(),
        "POST" => {
            let form = match parse_page_form(body.unwrap_or_default()) {
                Ok(form) => form,
                Err(e) => {
                    error!("Page form parse error: {}", e);
                    return helpers::err_response(400, &e);
                }
            };

            let mut page = Page::from_form(&form);
            let relay = LocalRelay::new(worker);
            match form.action.as_str() {
                "summarise" => page.request_summary(&relay).await,
                "flashcards" => page.request_flashcards(&relay).await,
                other => info!(action = other, "Ignoring unknown page action"),
            }
            page
        }
        _ => return helpers::empty(405),
    };

    match render_page(&page) {
        Ok(html) => helpers::html(200, html),
        Err(e) => {
            error!("{}", e);
            helpers::err_response(500, &e.to_string())
        }
    }
}
