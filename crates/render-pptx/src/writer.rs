//! Whole-document assembly: all package parts for one presentation.

use crate::error::RenderError;
use crate::package::PackageWriter;
use crate::parts;
use crate::shapes;
use decksmith_layout::RenderedSlide;
use decksmith_theme::Theme;

/// One presentation ready to serialize as a `.pptx` package.
pub struct PptxDocument<'a> {
    title: &'a str,
    author: Option<&'a str>,
    theme: &'a Theme,
    slides: &'a [RenderedSlide],
}

impl<'a> PptxDocument<'a> {
    pub fn new(
        title: &'a str,
        author: Option<&'a str>,
        theme: &'a Theme,
        slides: &'a [RenderedSlide],
    ) -> Self {
        Self { title, author, theme, slides }
    }

    /// Serialize the full package and return its bytes.
    ///
    /// Slides land in the package in input order: `slides/slide1.xml` is the
    /// first slide of the deck.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        log::info!("Assembling PPTX package with {} slides", self.slides.len());
        let mut package = PackageWriter::new();
        let count = self.slides.len();

        package.add_rels("_rels/.rels", &parts::root_rels())?;
        package.add_part(
            "ppt/presentation.xml",
            parts::CT_PRESENTATION,
            &parts::presentation(count),
        )?;
        package.add_rels(
            "ppt/_rels/presentation.xml.rels",
            &parts::presentation_rels(count),
        )?;

        package.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            parts::CT_SLIDE_MASTER,
            &parts::slide_master(),
        )?;
        package.add_rels(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &parts::slide_master_rels(),
        )?;
        package.add_part(
            "ppt/slideLayouts/slideLayout1.xml",
            parts::CT_SLIDE_LAYOUT,
            &parts::slide_layout(),
        )?;
        package.add_rels(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &parts::slide_layout_rels(),
        )?;
        package.add_part(
            "ppt/notesMasters/notesMaster1.xml",
            parts::CT_NOTES_MASTER,
            &parts::notes_master(),
        )?;
        package.add_rels(
            "ppt/notesMasters/_rels/notesMaster1.xml.rels",
            &parts::notes_master_rels(),
        )?;
        package.add_part("ppt/theme/theme1.xml", parts::CT_THEME, &parts::theme_part(self.theme))?;

        for (i, slide) in self.slides.iter().enumerate() {
            let number = i + 1;
            package.add_part(
                &format!("ppt/slides/slide{}.xml", number),
                parts::CT_SLIDE,
                &shapes::slide_xml(slide),
            )?;
            package.add_rels(
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &parts::slide_rels(number, slide.notes.is_some()),
            )?;
            if let Some(notes) = slide.notes.as_deref() {
                package.add_part(
                    &format!("ppt/notesSlides/notesSlide{}.xml", number),
                    parts::CT_NOTES_SLIDE,
                    &shapes::notes_slide_xml(notes),
                )?;
                package.add_rels(
                    &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
                    &parts::notes_slide_rels(number),
                )?;
            }
        }

        package.add_part(
            "docProps/core.xml",
            parts::CT_CORE_PROPS,
            &parts::core_props(self.title, self.author),
        )?;
        package.add_part("docProps/app.xml", parts::CT_APP_PROPS, &parts::app_props(count))?;

        package.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_layout::render_slide;
    use decksmith_model::Slide;
    use std::io::Read;

    fn render(json: serde_json::Value, number: usize, theme: &Theme) -> RenderedSlide {
        let slide: Slide = serde_json::from_value(json).unwrap();
        render_slide(&slide, theme, number)
    }

    fn read_part(bytes: Vec<u8>, name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn package_holds_one_part_per_slide_in_input_order() {
        let theme = Theme::default();
        let slides = vec![
            render(serde_json::json!({ "type": "title", "title": "Deck" }), 1, &theme),
            render(serde_json::json!({ "type": "content", "title": "Body" }), 2, &theme),
            render(serde_json::json!({ "type": "closing" }), 3, &theme),
        ];
        let bytes = PptxDocument::new("Deck", None, &theme, &slides)
            .to_bytes()
            .unwrap();

        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.clone())).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide3.xml".to_string()));
        assert!(!names.contains(&"ppt/slides/slide4.xml".to_string()));

        assert!(read_part(bytes.clone(), "ppt/slides/slide1.xml").contains("Deck"));
        assert!(read_part(bytes, "ppt/slides/slide2.xml").contains("Body"));
    }

    #[test]
    fn notes_produce_a_notes_slide_part() {
        let theme = Theme::default();
        let slides = vec![
            render(
                serde_json::json!({ "type": "content", "title": "A", "notes": "say hello" }),
                1,
                &theme,
            ),
            render(serde_json::json!({ "type": "content", "title": "B" }), 2, &theme),
        ];
        let bytes = PptxDocument::new("Deck", None, &theme, &slides)
            .to_bytes()
            .unwrap();

        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.clone())).unwrap();
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&"ppt/notesSlides/notesSlide1.xml".to_string()));
        assert!(!names.contains(&"ppt/notesSlides/notesSlide2.xml".to_string()));
        assert!(read_part(bytes, "ppt/notesSlides/notesSlide1.xml").contains("say hello"));
    }

    #[test]
    fn metadata_lands_in_core_properties() {
        let theme = Theme::default();
        let slides =
            vec![render(serde_json::json!({ "type": "title", "title": "T" }), 1, &theme)];
        let bytes = PptxDocument::new("Quarterly Review", Some("Ops Team"), &theme, &slides)
            .to_bytes()
            .unwrap();

        let core = read_part(bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Quarterly Review</dc:title>"));
        assert!(core.contains("<dc:creator>Ops Team</dc:creator>"));
    }

    #[test]
    fn content_types_cover_every_slide() {
        let theme = Theme::default();
        let slides = vec![
            render(serde_json::json!({ "type": "title", "title": "T" }), 1, &theme),
            render(serde_json::json!({ "type": "closing" }), 2, &theme),
        ];
        let bytes = PptxDocument::new("T", None, &theme, &slides)
            .to_bytes()
            .unwrap();

        let types = read_part(bytes, "[Content_Types].xml");
        assert!(types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(types.contains(r#"PartName="/ppt/theme/theme1.xml""#));
    }
}
