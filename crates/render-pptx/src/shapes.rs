//! Slide and notes-slide XML emission.
//!
//! Every laid-out element becomes one `p:sp` in the slide's shape tree,
//! positioned with an explicit `a:xfrm` in EMUs. Nothing inherits from
//! placeholders; the layout crate already decided every coordinate.

use crate::parts::{NS_A, NS_P, NS_R};
use crate::xml::escape_xml;
use decksmith_layout::{
    HAlign, LayoutElement, PositionedElement, RenderedSlide, ShapeElement, ShapeKind, TextElement,
    VAnchor,
};
use decksmith_types::{Rect, emu};

/// EMUs per point, for outline weights.
const EMU_PER_POINT: f32 = 12_700.0;

fn prst(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rect => "rect",
        ShapeKind::RoundedRect => "roundRect",
        ShapeKind::Ellipse => "ellipse",
        ShapeKind::Hexagon => "hexagon",
        ShapeKind::Diamond => "diamond",
    }
}

fn algn(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "l",
        HAlign::Center => "ctr",
        HAlign::Right => "r",
    }
}

fn anchor(anchor: VAnchor) -> &'static str {
    match anchor {
        VAnchor::Top => "t",
        VAnchor::Middle => "ctr",
    }
}

fn xfrm(frame: Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        emu(frame.x),
        emu(frame.y),
        emu(frame.width),
        emu(frame.height)
    )
}

fn text_body(text: &TextElement) -> String {
    let wrap = if text.wrap { "square" } else { "none" };
    let mut body = format!(
        r#"<p:txBody><a:bodyPr wrap="{}" anchor="{}"/><a:lstStyle/>"#,
        wrap,
        anchor(text.anchor)
    );
    for para in &text.paragraphs {
        let bullet = if para.bullet {
            r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/>"#
        } else {
            "<a:buNone/>"
        };
        body.push_str(&format!(
            r#"<a:p><a:pPr algn="{}">{}</a:pPr>"#,
            algn(para.align),
            bullet
        ));
        for run in &para.runs {
            let bold = if run.bold { " b=\"1\"" } else { "" };
            body.push_str(&format!(
                r#"<a:r><a:rPr lang="en-US" sz="{}"{} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:latin typeface="{}"/></a:rPr><a:t>{}</a:t></a:r>"#,
                (run.size * 100.0).round() as i64,
                bold,
                run.color.to_hex(),
                escape_xml(&run.font),
                escape_xml(&run.text)
            ));
        }
        body.push_str("</a:p>");
    }
    body.push_str("</p:txBody>");
    body
}

fn text_sp(id: usize, frame: Rect, text: &TextElement) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>{}</p:sp>"#,
        xfrm(frame),
        text_body(text)
    )
}

fn shape_sp(id: usize, frame: Rect, shape: &ShapeElement) -> String {
    let outline = match &shape.outline {
        Some(outline) => format!(
            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            (outline.weight_pt * EMU_PER_POINT).round() as i64,
            outline.color.to_hex()
        ),
        None => String::new(),
    };
    let body = match &shape.label {
        Some(label) => text_body(label),
        None => r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>"#.to_string(),
    };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Shape {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>{}<a:prstGeom prst="{}"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{}"/></a:solidFill>{}</p:spPr>{}</p:sp>"#,
        xfrm(frame),
        prst(shape.kind),
        shape.fill.to_hex(),
        outline,
        body
    )
}

fn sp(id: usize, element: &PositionedElement) -> String {
    match &element.element {
        LayoutElement::Text(text) => text_sp(id, element.frame, text),
        LayoutElement::Shape(shape) => shape_sp(id, element.frame, shape),
    }
}

/// Serialize one laid-out slide as `ppt/slides/slideN.xml`.
pub(crate) fn slide_xml(slide: &RenderedSlide) -> String {
    let mut shapes = String::new();
    // Shape id 1 is the group; content starts at 2.
    for (i, element) in slide.elements.iter().enumerate() {
        shapes.push_str(&sp(i + 2, element));
        shapes.push('\n');
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>
<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
{}</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>
"#,
        slide.background.to_hex(),
        shapes
    )
}

/// Serialize speaker notes as `ppt/notesSlides/notesSlideN.xml`.
pub(crate) fn notes_slide_xml(notes: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
<p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:notes>
"#,
        escape_xml(notes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_layout::render_slide;
    use decksmith_model::Slide;
    use decksmith_theme::Theme;

    fn rendered(json: serde_json::Value) -> RenderedSlide {
        let slide: Slide = serde_json::from_value(json).unwrap();
        render_slide(&slide, &Theme::default(), 1)
    }

    #[test]
    fn dark_slide_background_is_emitted() {
        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "section", "title": "Part One"
        })));
        assert!(xml.contains(r#"<a:srgbClr val="1B3139"/>"#));
        assert!(xml.contains("Part One"));
    }

    #[test]
    fn font_sizes_are_emitted_in_centipoints() {
        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "big-number", "number": "42", "text": "Answer"
        })));
        // 96pt number, 24pt text.
        assert!(xml.contains(r#"sz="9600""#));
        assert!(xml.contains(r#"sz="2400""#));
    }

    #[test]
    fn slide_text_is_escaped() {
        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "content", "title": "Q&A <Session>"
        })));
        assert!(xml.contains("Q&amp;A &lt;Session&gt;"));
        assert!(!xml.contains("Q&A"));
    }

    #[test]
    fn bullets_get_a_bullet_char_and_plain_text_does_not() {
        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "content", "title": "T", "bullets": ["first point"]
        })));
        assert!(xml.contains("a:buChar"));

        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "section", "title": "T"
        })));
        assert!(!xml.contains("a:buChar"));
    }

    #[test]
    fn shapes_use_preset_geometry() {
        let xml = slide_xml(&rendered(serde_json::json!({
            "type": "agenda", "items": ["one"]
        })));
        assert!(xml.contains(r#"prst="hexagon""#));
    }

    #[test]
    fn notes_text_lands_in_the_body_placeholder() {
        let xml = notes_slide_xml("mention the Q3 <numbers>");
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("mention the Q3 &lt;numbers&gt;"));
    }
}
