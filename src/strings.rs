//! Localized display text, looked up by key.
//!
//! The table is a flat JSON object, e.g.
//!
//! ```json
//! { "app_title": "Diaporama", "caption_city": "La ville la nuit" }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::StringsError;
use crate::slide::TextRef;
use crate::state::Position;

pub const CAPTION_PREFIX: &str = "caption_";

pub const APP_TITLE: &str = "app_title";
pub const BUTTON_BACK: &str = "button_back";
pub const BUTTON_NEXT: &str = "button_next";
pub const BUTTON_GO: &str = "button_go";
pub const JUMP_LABEL: &str = "jump_label";
pub const IMAGE_COUNTER: &str = "image_counter";

const DEFAULTS: [(&str, &str); 6] = [
    (APP_TITLE, "Slideshow"),
    (BUTTON_BACK, "Back"),
    (BUTTON_NEXT, "Next"),
    (BUTTON_GO, "Go"),
    (JUMP_LABEL, "Go to image"),
    (IMAGE_COUNTER, "Image {current} of {total}"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Strings {
    table: HashMap<String, String>,
}

impl Strings {
    pub fn from_json(json: &str) -> Result<Self, StringsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, StringsError> {
        let json = fs::read_to_string(path).map_err(|source| StringsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let strings = Self::from_json(&json)?;
        log::info!("Loaded {} strings from {}", strings.table.len(), path.display());
        Ok(strings)
    }

    /// Text for `key`. Unknown keys fall back to the built-in label, and
    /// unknown captions to their key without the `caption_` prefix.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.table.get(key) {
            return text.as_str();
        }
        if let Some((_, text)) = DEFAULTS.iter().find(|(k, _)| *k == key) {
            return *text;
        }
        key.strip_prefix(CAPTION_PREFIX).unwrap_or(key)
    }

    pub fn resolve<'a>(&'a self, text: &'a TextRef) -> &'a str {
        self.get(text.key())
    }

    pub fn counter(&self, position: Position) -> String {
        self.get(IMAGE_COUNTER)
            .replace("{current}", &position.current.to_string())
            .replace("{total}", &position.total.to_string())
    }
}
