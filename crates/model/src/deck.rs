use crate::slide::Slide;
use serde::{Deserialize, Serialize};

/// The full ordered collection of slides plus presentation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}
