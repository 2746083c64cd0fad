//! Two-stage deck parsing.
//!
//! The top-level object is deserialized with each slide kept as a raw JSON
//! value, then every slide is checked and decoded individually so failures
//! can name the offending slide index. No partial deck is ever returned.

use crate::deck::Deck;
use crate::error::ModelError;
use crate::slide::Slide;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawDeck {
    title: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    slides: Vec<Value>,
}

/// Parse raw JSON text into a validated [`Deck`].
pub fn parse_deck(json: &str) -> Result<Deck, ModelError> {
    let raw: RawDeck = serde_json::from_str(json)?;
    log::debug!("Parsing deck '{}' with {} slides", raw.title, raw.slides.len());

    let mut slides = Vec::with_capacity(raw.slides.len());
    for (index, value) in raw.slides.into_iter().enumerate() {
        slides.push(parse_slide(index, value)?);
    }

    Ok(Deck {
        title: raw.title,
        author: raw.author,
        date: raw.date,
        slides,
    })
}

fn parse_slide(index: usize, value: Value) -> Result<Slide, ModelError> {
    let tag = match value.get("type").and_then(Value::as_str) {
        Some(tag) => tag.to_string(),
        None => {
            return Err(ModelError::Schema {
                index,
                message: "missing or non-string \"type\" field".to_string(),
            });
        }
    };

    if !Slide::KNOWN_TYPES.contains(&tag.as_str()) {
        return Err(ModelError::UnknownSlideType { index, tag });
    }

    serde_json::from_value(value).map_err(|e| ModelError::Schema {
        index,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deck_in_input_order() {
        let deck = parse_deck(
            r#"{
                "title": "Demo",
                "author": "Ada",
                "slides": [
                    { "type": "title", "title": "Demo" },
                    { "type": "section", "title": "Part One" },
                    { "type": "content", "title": "Points", "bullets": ["a", "b"] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(deck.title, "Demo");
        assert_eq!(deck.author.as_deref(), Some("Ada"));
        let tags: Vec<_> = deck.slides.iter().map(|s| s.type_tag()).collect();
        assert_eq!(tags, ["title", "section", "content"]);
    }

    #[test]
    fn unknown_type_names_the_slide_index() {
        let err = parse_deck(
            r#"{
                "title": "Demo",
                "slides": [
                    { "type": "title", "title": "Demo" },
                    { "type": "bogus" }
                ]
            }"#,
        )
        .unwrap_err();

        match err {
            ModelError::UnknownSlideType { index, tag } => {
                assert_eq!(index, 1);
                assert_eq!(tag, "bogus");
            }
            other => panic!("expected UnknownSlideType, got {:?}", other),
        }
    }

    #[test]
    fn missing_required_field_is_a_schema_error_with_index() {
        let err = parse_deck(
            r#"{
                "title": "Demo",
                "slides": [ { "type": "big-number", "number": "42" } ]
            }"#,
        )
        .unwrap_err();

        match err {
            ModelError::Schema { index, message } => {
                assert_eq!(index, 0);
                assert!(message.contains("text"), "message was: {}", message);
            }
            other => panic!("expected Schema, got {:?}", other),
        }
    }

    #[test]
    fn missing_type_field_is_a_schema_error() {
        let err = parse_deck(
            r#"{ "title": "Demo", "slides": [ { "title": "No tag" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Schema { index: 0, .. }));
    }

    #[test]
    fn top_level_garbage_is_a_json_error() {
        assert!(matches!(
            parse_deck("not json").unwrap_err(),
            ModelError::Json(_)
        ));
    }

    #[test]
    fn deck_without_slides_is_valid_and_empty() {
        let deck = parse_deck(r#"{ "title": "Empty" }"#).unwrap();
        assert!(deck.slides.is_empty());
    }
}
