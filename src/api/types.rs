use serde::Serialize;

/// Body of every non-2xx response from the show routes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wire form of a stored show. NULL columns are left out of the object, so
/// a TV-show row carries no song keys and a song row no TV-show keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowDto {
    pub id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worth_a_watch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// `/health/ready` report. `shows` is the catalog size, absent when the
/// database could not be queried.
#[derive(Debug, Serialize)]
pub struct CatalogReadiness {
    pub ready: bool,
    pub database: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shows: Option<u64>,
}
