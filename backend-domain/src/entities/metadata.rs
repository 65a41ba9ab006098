// NFT metadata documents
// The template is authored per show by an organizer; the final document
// is composed per ticket and pinned immutably

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    pub trait_type: String,
    pub value: serde_json::Value,
}

/// Template fetched from content-addressed storage. Every field is
/// optional; composition falls back to show/event display fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataTemplate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub attributes: Vec<MetadataAttribute>,
}

/// The document pinned for a single ticket (and, with the image URL as
/// authored, for a show's template).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<MetadataAttribute>,
}
