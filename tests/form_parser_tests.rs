use vibecards::form_parser::{decode_url_component, parse_page_form, parse_pairs};

#[test]
fn test_decode_url_component() {
    // Percent-encoded characters
    assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");

    // Plus signs represent spaces
    assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");

    // An encoded plus must survive as a literal plus
    assert_eq!(decode_url_component("1%2B1%3D2").unwrap(), "1+1=2");

    // Special characters
    assert_eq!(
        decode_url_component("test%40example.com%26param%3Dvalue").unwrap(),
        "test@example.com&param=value"
    );
}

#[test]
fn test_decode_rejects_invalid_utf8() {
    assert!(decode_url_component("%FF%FE").is_err());
}

#[test]
fn test_parse_page_form_success() {
    let form = parse_page_form(
        "text=The+cat+sat+on+the+mat.&summary=&flashcards=%5B%5D&action=flashcards",
    )
    .unwrap();

    assert_eq!(form.action, "flashcards");
    assert_eq!(form.text, "The cat sat on the mat.");
    assert_eq!(form.summary, "");
    assert_eq!(form.flashcards, "[]");
}

#[test]
fn test_parse_page_form_multiline_text() {
    let form = parse_page_form("text=line+one%0D%0Aline+two&action=summarise").unwrap();
    assert_eq!(form.text, "line one\r\nline two");
}

#[test]
fn test_parse_page_form_missing_fields_default_empty() {
    let form = parse_page_form("action=summarise").unwrap();
    assert_eq!(form.action, "summarise");
    assert!(form.text.is_empty());
    assert!(form.summary.is_empty());
    assert!(form.flashcards.is_empty());

    let empty = parse_page_form("").unwrap();
    assert!(empty.action.is_empty());
}

#[test]
fn test_parse_pairs_key_without_value() {
    let pairs = parse_pairs("text&action=summarise").unwrap();
    assert_eq!(pairs.get("text").map(String::as_str), Some(""));
    assert_eq!(pairs.get("action").map(String::as_str), Some("summarise"));
}

#[test]
fn test_parse_pairs_last_value_wins() {
    let pairs = parse_pairs("action=summarise&action=flashcards").unwrap();
    assert_eq!(pairs.get("action").map(String::as_str), Some("flashcards"));
}
