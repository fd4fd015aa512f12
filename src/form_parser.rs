use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::collections::HashMap;

/// Fields the page form submits back to `POST /`.
///
/// `summary` and `flashcards` carry the results already on screen, so a
/// server-rendered round trip can keep them when a new request fails.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PageForm {
    pub action: String,
    pub text: String,
    pub summary: String,
    pub flashcards: String,
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// # Examples
///
/// ```
/// use vibecards::form_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("1%2B1").unwrap(), "1+1");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Parses an urlencoded body into key/value pairs. Later keys win.
pub fn parse_pairs(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key)
            .map_err(|e| format!("Failed to decode key: {}", e))?;
        let value = decode_url_component(raw_value)
            .map_err(|e| format!("Failed to decode value: {}", e))?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Parses the page form body. Missing fields default to empty strings.
///
/// # Examples
///
/// ```
/// use vibecards::form_parser::parse_page_form;
///
/// let form = parse_page_form("action=summarise&text=The+cat+sat.").unwrap();
/// assert_eq!(form.action, "summarise");
/// assert_eq!(form.text, "The cat sat.");
/// assert!(form.summary.is_empty());
/// ```
pub fn parse_page_form(form_data: &str) -> Result<PageForm, String> {
    let mut map = parse_pairs(form_data)?;
    let mut take = |key: &str| map.remove(key).unwrap_or_default();

    Ok(PageForm {
        action: take("action"),
        text: take("text"),
        summary: take("summary"),
        flashcards: take("flashcards"),
    })
}
