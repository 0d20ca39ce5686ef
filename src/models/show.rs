use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ShowId;

pub const TITLE_MAX_LEN: usize = 50;
pub const IMAGE_MAX_LEN: usize = 50;
pub const ALBUM_NAME_MAX_LEN: usize = 50;
pub const ARTIST_MAX_LEN: usize = 50;

/// A catalog entry. Rows describe either a 90s TV show (`image`,
/// `number_of_seasons`, `worth_a_watch`) or a song (`album_name`,
/// `duration`, `artist`, `created`); the columns of the other kind are NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub image: Option<String>,
    pub year: u32,
    pub number_of_seasons: Option<u32>,
    pub worth_a_watch: Option<bool>,
    pub album_name: Option<String>,
    /// Length in seconds.
    pub duration: Option<u32>,
    pub artist: Option<String>,
    /// Creation timestamp as text, e.g. `2024-01-01T12:00:00Z`.
    pub created: Option<String>,
}

/// Admin listing form, e.g. `Friends - 1994`.
impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.year)
    }
}

/// A show that has not been stored yet. Only the administrative import
/// builds these; the HTTP API never writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewShow {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub year: u32,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default = "default_worth_a_watch")]
    pub worth_a_watch: Option<bool>,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

#[allow(clippy::unnecessary_wraps)]
const fn default_worth_a_watch() -> Option<bool> {
    Some(true)
}

impl NewShow {
    #[must_use]
    pub fn new(title: impl Into<String>, year: u32) -> Self {
        Self {
            title: title.into(),
            image: None,
            year,
            number_of_seasons: None,
            worth_a_watch: default_worth_a_watch(),
            album_name: None,
            duration: None,
            artist: None,
            created: None,
        }
    }

    /// Checks the column constraints the schema declares.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Show title cannot be empty".to_string());
        }

        if self.title.chars().count() > TITLE_MAX_LEN {
            return Err(format!(
                "Show title '{}' must be {TITLE_MAX_LEN} characters or less",
                self.title
            ));
        }

        check_len("Image", self.image.as_deref(), IMAGE_MAX_LEN, &self.title)?;
        check_len(
            "Album name",
            self.album_name.as_deref(),
            ALBUM_NAME_MAX_LEN,
            &self.title,
        )?;
        check_len("Artist", self.artist.as_deref(), ARTIST_MAX_LEN, &self.title)?;

        Ok(())
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize, title: &str) -> Result<(), String> {
    match value {
        Some(value) if value.chars().count() > max => Err(format!(
            "{field} for '{title}' must be {max} characters or less"
        )),
        _ => Ok(()),
    }
}
