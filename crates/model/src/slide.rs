//! The tagged slide variants and their field sets.

use serde::{Deserialize, Serialize};

/// One slide record, discriminated by its `"type"` tag.
///
/// Required fields are plain; everything else defaults the way the slide
/// renders when the field is absent. Extra JSON fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Title {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        author: Option<String>,
        #[serde(default)]
        date: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Section {
        title: String,
        #[serde(default)]
        notes: Option<String>,
    },
    Content {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    TwoColumn {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        left_header: Option<String>,
        #[serde(default)]
        right_header: Option<String>,
        #[serde(default)]
        left: Vec<String>,
        #[serde(default)]
        right: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    ThreeColumn {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        columns: Vec<Column>,
        #[serde(default)]
        notes: Option<String>,
    },
    BigNumber {
        number: String,
        text: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Callout {
        text: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Quote {
        quote: String,
        #[serde(default)]
        attribution: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Closing {
        #[serde(default = "defaults::closing_title")]
        title: String,
        #[serde(default)]
        notes: Option<String>,
    },
    Agenda {
        #[serde(default = "defaults::agenda_title")]
        title: String,
        items: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Timeline {
        #[serde(default = "defaults::timeline_title")]
        title: String,
        steps: Vec<Step>,
        #[serde(default)]
        notes: Option<String>,
    },
    IconGrid {
        #[serde(default = "defaults::icon_grid_title")]
        title: String,
        #[serde(alias = "features")]
        items: Vec<GridItem>,
        #[serde(default)]
        notes: Option<String>,
    },
    StatRow {
        #[serde(default = "defaults::stat_row_title")]
        title: String,
        stats: Vec<Stat>,
        #[serde(default)]
        notes: Option<String>,
    },
    ProsCons {
        #[serde(default = "defaults::pros_cons_title")]
        title: String,
        #[serde(default = "defaults::pros_header")]
        pros_header: String,
        #[serde(default = "defaults::cons_header")]
        cons_header: String,
        #[serde(default)]
        pros: Vec<String>,
        #[serde(default)]
        cons: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    Comparison {
        #[serde(default = "defaults::comparison_title")]
        title: String,
        #[serde(default = "defaults::left_label")]
        left_label: String,
        #[serde(default = "defaults::right_label")]
        right_label: String,
        #[serde(default)]
        notes: Option<String>,
    },
    Checklist {
        #[serde(default = "defaults::checklist_title")]
        title: String,
        items: Vec<ChecklistItem>,
        #[serde(default)]
        notes: Option<String>,
    },
    Logos {
        #[serde(default = "defaults::logos_title")]
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        logos: Vec<LogoItem>,
        #[serde(default)]
        notes: Option<String>,
    },
    TwoColumnIcons {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        columns: Vec<Column>,
        #[serde(default)]
        notes: Option<String>,
    },
    ThreeColumnIcons {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        columns: Vec<Column>,
        #[serde(default)]
        notes: Option<String>,
    },
    Cards {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        cards: Vec<Card>,
        #[serde(default)]
        notes: Option<String>,
    },
    CardRight {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        card_content: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    CardLeft {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        card_content: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    CardFull {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    OneColumn {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        content: Option<String>,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    SectionDescription {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        notes: Option<String>,
    },
}

/// A column in the multi-column slide types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A card on the `cards` slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One step on the `timeline` slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One `{value, label}` pair on the `stat-row` slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One cell of the `icon-grid` slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A checklist item: a plain string or `{text, checked}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChecklistItem {
    Text(String),
    Item {
        text: String,
        #[serde(default)]
        checked: bool,
    },
}

impl ChecklistItem {
    pub fn text(&self) -> &str {
        match self {
            ChecklistItem::Text(text) => text,
            ChecklistItem::Item { text, .. } => text,
        }
    }

    pub fn checked(&self) -> bool {
        match self {
            ChecklistItem::Text(_) => false,
            ChecklistItem::Item { checked, .. } => *checked,
        }
    }
}

/// A logo entry: a plain string or `{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogoItem {
    Name(String),
    Entry { name: String },
}

impl LogoItem {
    pub fn name(&self) -> &str {
        match self {
            LogoItem::Name(name) => name,
            LogoItem::Entry { name } => name,
        }
    }
}

mod defaults {
    pub fn closing_title() -> String {
        "Thank You".to_string()
    }
    pub fn agenda_title() -> String {
        "Agenda".to_string()
    }
    pub fn timeline_title() -> String {
        "Timeline".to_string()
    }
    pub fn icon_grid_title() -> String {
        "Features".to_string()
    }
    pub fn stat_row_title() -> String {
        "Key Metrics".to_string()
    }
    pub fn pros_cons_title() -> String {
        "Pros & Cons".to_string()
    }
    pub fn pros_header() -> String {
        "Pros".to_string()
    }
    pub fn cons_header() -> String {
        "Cons".to_string()
    }
    pub fn comparison_title() -> String {
        "Comparison".to_string()
    }
    pub fn left_label() -> String {
        "Option A".to_string()
    }
    pub fn right_label() -> String {
        "Option B".to_string()
    }
    pub fn checklist_title() -> String {
        "Checklist".to_string()
    }
    pub fn logos_title() -> String {
        "Our Partners".to_string()
    }
}

impl Slide {
    /// Every type tag the parser accepts, in schema order.
    pub const KNOWN_TYPES: [&'static str; 25] = [
        "title",
        "section",
        "content",
        "two-column",
        "three-column",
        "big-number",
        "callout",
        "quote",
        "closing",
        "agenda",
        "timeline",
        "icon-grid",
        "stat-row",
        "pros-cons",
        "comparison",
        "checklist",
        "logos",
        "two-column-icons",
        "three-column-icons",
        "cards",
        "card-right",
        "card-left",
        "card-full",
        "one-column",
        "section-description",
    ];

    /// The kebab-case discriminator this slide was parsed from.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Slide::Title { .. } => "title",
            Slide::Section { .. } => "section",
            Slide::Content { .. } => "content",
            Slide::TwoColumn { .. } => "two-column",
            Slide::ThreeColumn { .. } => "three-column",
            Slide::BigNumber { .. } => "big-number",
            Slide::Callout { .. } => "callout",
            Slide::Quote { .. } => "quote",
            Slide::Closing { .. } => "closing",
            Slide::Agenda { .. } => "agenda",
            Slide::Timeline { .. } => "timeline",
            Slide::IconGrid { .. } => "icon-grid",
            Slide::StatRow { .. } => "stat-row",
            Slide::ProsCons { .. } => "pros-cons",
            Slide::Comparison { .. } => "comparison",
            Slide::Checklist { .. } => "checklist",
            Slide::Logos { .. } => "logos",
            Slide::TwoColumnIcons { .. } => "two-column-icons",
            Slide::ThreeColumnIcons { .. } => "three-column-icons",
            Slide::Cards { .. } => "cards",
            Slide::CardRight { .. } => "card-right",
            Slide::CardLeft { .. } => "card-left",
            Slide::CardFull { .. } => "card-full",
            Slide::OneColumn { .. } => "one-column",
            Slide::SectionDescription { .. } => "section-description",
        }
    }

    /// Whether this slide renders on the dark base background.
    ///
    /// Structural slides (title, section, callout, quote, closing) are dark;
    /// every content slide is light.
    pub fn is_dark(&self) -> bool {
        matches!(
            self,
            Slide::Title { .. }
                | Slide::Section { .. }
                | Slide::Callout { .. }
                | Slide::Quote { .. }
                | Slide::Closing { .. }
        )
    }

    /// Speaker notes attached to the slide, if any.
    pub fn notes(&self) -> Option<&str> {
        let notes = match self {
            Slide::Title { notes, .. }
            | Slide::Section { notes, .. }
            | Slide::Content { notes, .. }
            | Slide::TwoColumn { notes, .. }
            | Slide::ThreeColumn { notes, .. }
            | Slide::BigNumber { notes, .. }
            | Slide::Callout { notes, .. }
            | Slide::Quote { notes, .. }
            | Slide::Closing { notes, .. }
            | Slide::Agenda { notes, .. }
            | Slide::Timeline { notes, .. }
            | Slide::IconGrid { notes, .. }
            | Slide::StatRow { notes, .. }
            | Slide::ProsCons { notes, .. }
            | Slide::Comparison { notes, .. }
            | Slide::Checklist { notes, .. }
            | Slide::Logos { notes, .. }
            | Slide::TwoColumnIcons { notes, .. }
            | Slide::ThreeColumnIcons { notes, .. }
            | Slide::Cards { notes, .. }
            | Slide::CardRight { notes, .. }
            | Slide::CardLeft { notes, .. }
            | Slide::CardFull { notes, .. }
            | Slide::OneColumn { notes, .. }
            | Slide::SectionDescription { notes, .. } => notes,
        };
        notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_cover_every_variant() {
        assert_eq!(Slide::KNOWN_TYPES.len(), 25);
        // Each tag deserializes into the variant that reports the same tag.
        for tag in Slide::KNOWN_TYPES {
            let value = serde_json::json!({
                "type": tag,
                "title": "T",
                "number": "1",
                "text": "t",
                "quote": "q",
                "items": [],
                "steps": [],
                "stats": [],
                "logos": [],
            });
            let slide: Slide = serde_json::from_value(value).unwrap();
            assert_eq!(slide.type_tag(), tag);
        }
    }

    #[test]
    fn dark_set_is_exactly_the_structural_slides() {
        let dark = ["title", "section", "callout", "quote", "closing"];
        for tag in Slide::KNOWN_TYPES {
            let value = serde_json::json!({
                "type": tag,
                "title": "T",
                "number": "1",
                "text": "t",
                "quote": "q",
                "items": [],
                "steps": [],
                "stats": [],
                "logos": [],
            });
            let slide: Slide = serde_json::from_value(value).unwrap();
            assert_eq!(slide.is_dark(), dark.contains(&tag), "tag {}", tag);
        }
    }

    #[test]
    fn checklist_items_accept_both_shapes() {
        let plain: ChecklistItem = serde_json::from_str(r#""ship it""#).unwrap();
        assert_eq!(plain.text(), "ship it");
        assert!(!plain.checked());

        let rich: ChecklistItem =
            serde_json::from_str(r#"{ "text": "done", "checked": true }"#).unwrap();
        assert_eq!(rich.text(), "done");
        assert!(rich.checked());
    }

    #[test]
    fn closing_title_defaults() {
        let slide: Slide = serde_json::from_str(r#"{ "type": "closing" }"#).unwrap();
        match slide {
            Slide::Closing { title, .. } => assert_eq!(title, "Thank You"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
