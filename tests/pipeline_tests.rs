//! End-to-end pipeline tests: deck JSON in, PPTX package out.

use decksmith::{DeckPipeline, PipelineError, Theme};
use std::io::Read;

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    archive.file_names().map(str::to_string).collect()
}

const DEMO_DECK: &str = r#"{
    "title": "Platform Review",
    "author": "Data Team",
    "slides": [
        { "type": "title", "title": "Platform Review", "subtitle": "Q3" },
        { "type": "agenda", "items": ["Numbers", "Roadmap"] },
        { "type": "big-number", "number": "42", "text": "New customers" },
        { "type": "stat-row", "stats": [
            { "value": "10x", "label": "Faster" },
            { "value": "99.99%", "label": "Uptime" }
        ] },
        { "type": "closing", "notes": "Leave time for questions" }
    ]
}"#;

#[test]
fn generates_one_slide_part_per_deck_slide_in_order() {
    let bytes = DeckPipeline::new(Theme::default()).generate(DEMO_DECK).unwrap();

    let names = part_names(&bytes);
    let slide_parts = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slide_parts, 5);

    // Input order: the title slide is slide1, the closing slide is slide5.
    assert!(read_part(&bytes, "ppt/slides/slide1.xml").contains("Platform Review"));
    assert!(read_part(&bytes, "ppt/slides/slide3.xml").contains("New customers"));
    assert!(read_part(&bytes, "ppt/slides/slide5.xml").contains("Thank You"));
}

#[test]
fn speaker_notes_become_notes_slides() {
    let bytes = DeckPipeline::new(Theme::default()).generate(DEMO_DECK).unwrap();

    let names = part_names(&bytes);
    assert!(names.contains(&"ppt/notesSlides/notesSlide5.xml".to_string()));
    assert!(!names.contains(&"ppt/notesSlides/notesSlide1.xml".to_string()));
    assert!(
        read_part(&bytes, "ppt/notesSlides/notesSlide5.xml").contains("Leave time for questions")
    );
}

#[test]
fn deck_metadata_reaches_core_properties() {
    let bytes = DeckPipeline::new(Theme::default()).generate(DEMO_DECK).unwrap();
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:title>Platform Review</dc:title>"));
    assert!(core.contains("<dc:creator>Data Team</dc:creator>"));
}

#[test]
fn theme_accent_override_reaches_slide_xml() {
    let theme = Theme::from_json(
        r##"{
            "modes": {
                "light": {
                    "background": "#FFFFFF",
                    "text_primary": "#111111",
                    "text_secondary": "#777777",
                    "accent": "#0055FF"
                }
            }
        }"##,
    )
    .unwrap();

    let deck = r#"{
        "title": "T",
        "slides": [ { "type": "big-number", "number": "7", "text": "days" } ]
    }"#;
    let bytes = DeckPipeline::new(theme).generate(deck).unwrap();

    // The big number renders in the light-mode accent color.
    assert!(read_part(&bytes, "ppt/slides/slide1.xml").contains(r#"val="0055FF""#));
}

#[test]
fn footer_lands_on_light_slides_only() {
    let theme = Theme::from_json(r#"{ "footer": { "text": "Acme Internal" } }"#).unwrap();
    let deck = r#"{
        "title": "T",
        "slides": [
            { "type": "section", "title": "Part One" },
            { "type": "content", "title": "Details" }
        ]
    }"#;
    let bytes = DeckPipeline::new(theme).generate(deck).unwrap();

    assert!(!read_part(&bytes, "ppt/slides/slide1.xml").contains("Acme Internal"));
    assert!(read_part(&bytes, "ppt/slides/slide2.xml").contains("Acme Internal"));
}

#[test]
fn unknown_slide_type_fails_and_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pptx");
    let deck = r#"{
        "title": "T",
        "slides": [
            { "type": "title", "title": "T" },
            { "type": "pie-chart", "title": "Nope" }
        ]
    }"#;

    let err = DeckPipeline::new(Theme::default())
        .generate_to_file(deck, &output)
        .unwrap_err();

    match err {
        PipelineError::Model(model) => {
            let message = model.to_string();
            assert!(message.contains("pie-chart"), "message was: {}", message);
            assert!(message.contains('1'), "message was: {}", message);
        }
        other => panic!("expected a model error, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn schema_error_names_the_offending_slide() {
    let deck = r#"{
        "title": "T",
        "slides": [
            { "type": "title", "title": "ok" },
            { "type": "quote" }
        ]
    }"#;
    let err = DeckPipeline::new(Theme::default()).generate(deck).unwrap_err();
    assert!(err.to_string().contains("slide 1"), "message was: {}", err);
}

#[test]
fn generate_to_file_writes_a_readable_package() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");

    DeckPipeline::new(Theme::default())
        .generate_to_file(DEMO_DECK, &output)
        .unwrap();

    let bytes = std::fs::read(&output).unwrap();
    let names = part_names(&bytes);
    assert!(names.contains(&"[Content_Types].xml".to_string()));
    assert!(names.contains(&"ppt/presentation.xml".to_string()));
}
