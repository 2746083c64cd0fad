//! Fixed and parameterized package parts: presentation root, masters,
//! layout, theme and document properties.

use crate::xml::escape_xml;
use decksmith_theme::Theme;
use decksmith_types::Color;

pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub(crate) const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
pub(crate) const CT_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
pub(crate) const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
pub(crate) const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
pub(crate) const CT_NOTES_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
pub(crate) const CT_NOTES_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
pub(crate) const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
pub(crate) const CT_CORE_PROPS: &str =
    "application/vnd.openxmlformats-package.core-properties+xml";
pub(crate) const CT_APP_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// 13.333in x 7.5in widescreen canvas, in EMUs.
pub(crate) const SLIDE_CX: i64 = 12_192_000;
pub(crate) const SLIDE_CY: i64 = 6_858_000;

fn relationships(entries: &[(String, String, String)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for (id, rel_type, target) in entries {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>\n",
            id, rel_type, target
        ));
    }
    xml.push_str("</Relationships>\n");
    xml
}

/// The package-level `_rels/.rels`.
pub(crate) fn root_rels() -> String {
    relationships(&[
        (
            "rId1".to_string(),
            format!("{}/officeDocument", REL_BASE),
            "ppt/presentation.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .to_string(),
            "docProps/core.xml".to_string(),
        ),
        (
            "rId3".to_string(),
            format!("{}/extended-properties", REL_BASE),
            "docProps/app.xml".to_string(),
        ),
    ])
}

/// `ppt/presentation.xml` with one entry per slide.
pub(crate) fn presentation(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for i in 0..slide_count {
        slide_ids.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            256 + i,
            3 + i
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:notesMasterIdLst><p:notesMasterId r:id="rId2"/></p:notesMasterIdLst>
<p:sldIdLst>{slide_ids}</p:sldIdLst>
<p:sldSz cx="{SLIDE_CX}" cy="{SLIDE_CY}"/>
<p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>
"#
    )
}

/// `ppt/_rels/presentation.xml.rels`: master, notes master, then slides.
pub(crate) fn presentation_rels(slide_count: usize) -> String {
    let mut entries = vec![
        (
            "rId1".to_string(),
            format!("{}/slideMaster", REL_BASE),
            "slideMasters/slideMaster1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            format!("{}/notesMaster", REL_BASE),
            "notesMasters/notesMaster1.xml".to_string(),
        ),
    ];
    for i in 0..slide_count {
        entries.push((
            format!("rId{}", 3 + i),
            format!("{}/slide", REL_BASE),
            format!("slides/slide{}.xml", i + 1),
        ));
    }
    relationships(&entries)
}

fn empty_sp_tree() -> &'static str {
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#
}

const CLR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;

/// A minimal slide master; every slide references the single blank layout.
pub(crate) fn slide_master() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>{}</p:cSld>
<p:clrMap {CLR_MAP}/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>
"#,
        empty_sp_tree()
    )
}

pub(crate) fn slide_master_rels() -> String {
    relationships(&[
        (
            "rId1".to_string(),
            format!("{}/slideLayout", REL_BASE),
            "../slideLayouts/slideLayout1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            format!("{}/theme", REL_BASE),
            "../theme/theme1.xml".to_string(),
        ),
    ])
}

/// The single blank layout; all positioning lives on the slides themselves.
pub(crate) fn slide_layout() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1">
<p:cSld name="Blank">{}</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>
"#,
        empty_sp_tree()
    )
}

pub(crate) fn slide_layout_rels() -> String {
    relationships(&[(
        "rId1".to_string(),
        format!("{}/slideMaster", REL_BASE),
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

pub(crate) fn notes_master() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notesMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>{}</p:cSld>
<p:clrMap {CLR_MAP}/>
</p:notesMaster>
"#,
        empty_sp_tree()
    )
}

pub(crate) fn notes_master_rels() -> String {
    relationships(&[(
        "rId1".to_string(),
        format!("{}/theme", REL_BASE),
        "../theme/theme1.xml".to_string(),
    )])
}

fn srgb(color: Color) -> String {
    format!("<a:srgbClr val=\"{}\"/>", color.to_hex())
}

/// `ppt/theme/theme1.xml` seeded from the active theme's palette and font.
pub(crate) fn theme_part(theme: &Theme) -> String {
    let light = &theme.modes.light;
    let dark = &theme.modes.dark;
    let font = escape_xml(&theme.typography.font_family);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{NS_A}" name="Deck Theme">
<a:themeElements>
<a:clrScheme name="Deck">
<a:dk1>{dk1}</a:dk1>
<a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>
<a:dk2>{dk2}</a:dk2>
<a:lt2>{lt2}</a:lt2>
<a:accent1>{accent1}</a:accent1>
<a:accent2>{accent2}</a:accent2>
<a:accent3>{accent3}</a:accent3>
<a:accent4>{accent4}</a:accent4>
<a:accent5>{accent5}</a:accent5>
<a:accent6>{accent6}</a:accent6>
<a:hlink>{hlink}</a:hlink>
<a:folHlink>{hlink2}</a:folHlink>
</a:clrScheme>
<a:fontScheme name="Deck">
<a:majorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Office">
<a:fillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:fillStyleLst>
<a:lnStyleLst>
<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
</a:lnStyleLst>
<a:effectStyleLst>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
</a:effectStyleLst>
<a:bgFillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>
"#,
        dk1 = srgb(light.text_primary),
        dk2 = srgb(dark.background),
        lt2 = srgb(light.background),
        accent1 = srgb(light.accent),
        accent2 = srgb(theme.elements.pros_header_color),
        accent3 = srgb(theme.elements.cons_header_color),
        accent4 = srgb(light.text_secondary),
        accent5 = srgb(theme.elements.stat_row_divider),
        accent6 = srgb(light.surface),
        hlink = srgb(light.accent),
        hlink2 = srgb(light.text_secondary),
    )
}

/// `docProps/core.xml` with title, author and timestamps.
pub(crate) fn core_props(title: &str, author: Option<&str>) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
<dc:title>{title}</dc:title>
<dc:creator>{creator}</dc:creator>
<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>
<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>
</cp:coreProperties>
"#,
        title = escape_xml(title),
        creator = escape_xml(author.unwrap_or_default()),
    )
}

/// `docProps/app.xml` with the slide count.
pub(crate) fn app_props(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
<Application>decksmith</Application>
<Slides>{slide_count}</Slides>
<PresentationFormat>Widescreen</PresentationFormat>
</Properties>
"#
    )
}

/// `ppt/slides/_rels/slideN.xml.rels`; notes-bearing slides also point at
/// their notes slide.
pub(crate) fn slide_rels(slide_number: usize, has_notes: bool) -> String {
    let mut entries = vec![(
        "rId1".to_string(),
        format!("{}/slideLayout", REL_BASE),
        "../slideLayouts/slideLayout1.xml".to_string(),
    )];
    if has_notes {
        entries.push((
            "rId2".to_string(),
            format!("{}/notesSlide", REL_BASE),
            format!("../notesSlides/notesSlide{}.xml", slide_number),
        ));
    }
    relationships(&entries)
}

pub(crate) fn notes_slide_rels(slide_number: usize) -> String {
    relationships(&[
        (
            "rId1".to_string(),
            format!("{}/notesMaster", REL_BASE),
            "../notesMasters/notesMaster1.xml".to_string(),
        ),
        (
            "rId2".to_string(),
            format!("{}/slide", REL_BASE),
            format!("../slides/slide{}.xml", slide_number),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_lists_every_slide_in_order() {
        let xml = presentation(3);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId5"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn theme_part_carries_palette_and_font() {
        let xml = theme_part(&Theme::default());
        assert!(xml.contains(r#"<a:srgbClr val="FF3621"/>"#));
        assert!(xml.contains(r#"typeface="DM Sans""#));
    }

    #[test]
    fn core_props_escape_metadata() {
        let xml = core_props("Q3 <Review>", Some("A & B"));
        assert!(xml.contains("Q3 &lt;Review&gt;"));
        assert!(xml.contains("A &amp; B"));
    }
}
