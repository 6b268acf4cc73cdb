use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Number of items per page for every paginated flow in the service
pub const RESULTS_PER_PAGE: usize = 20;

/// The two recognized media catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Book,
    Movie,
}

impl FromStr for MediaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(MediaType::Book),
            "movie" => Ok(MediaType::Movie),
            other => Err(AppError::InvalidInput(format!(
                "unrecognized media type {:?}",
                other
            ))),
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Book => write!(f, "book"),
            MediaType::Movie => write!(f, "movie"),
        }
    }
}

/// A media entry (book volume or movie) as returned to the client.
///
/// Only `id`, `title` and `categories` participate in recommendation
/// resolution; the remaining fields ride along for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// One page of results in the uniform response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    /// Always >= 1, even for an empty result set
    pub total_pages: u64,
    /// Zero-indexed page the items belong to
    pub page: u32,
}

/// A validated recommendation request, built once per call
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub media_type: MediaType,
    pub media_id: String,
    pub page: u32,
}

impl RecommendationRequest {
    /// Validates raw query parameters into a request.
    ///
    /// A missing `page_number` defaults to 0; a present but unparseable one is
    /// rejected. The media id must be non-empty and the media type must be one
    /// of the two recognized values.
    pub fn parse(
        media_type: Option<&str>,
        media_id: Option<&str>,
        page_number: Option<&str>,
    ) -> AppResult<Self> {
        let media_type = media_type.unwrap_or_default().parse::<MediaType>()?;

        let media_id = match media_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(AppError::InvalidInput(
                    "mediaId must not be empty".to_string(),
                ))
            }
        };

        let page = parse_page_number(page_number)?;

        Ok(Self {
            media_type,
            media_id,
            page,
        })
    }
}

/// Parses an optional `pageNumber` parameter, defaulting to page 0
pub fn parse_page_number(raw: Option<&str>) -> AppResult<u32> {
    match raw {
        None => Ok(0),
        Some(value) => value.parse::<u32>().map_err(|_| {
            AppError::InvalidInput(format!(
                "pageNumber must be a non-negative integer, got {:?}",
                value
            ))
        }),
    }
}

/// One page of a book catalog search, with the catalog's reported total
#[derive(Debug, Clone, PartialEq)]
pub struct BookSearchPage {
    pub items: Vec<MediaItem>,
    pub total_items: u64,
}

/// One natively paginated page of movie catalog results
#[derive(Debug, Clone, PartialEq)]
pub struct MovieResultsPage {
    pub items: Vec<MediaItem>,
    pub total_items: u64,
    pub total_pages: u64,
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// A volume record from the Books API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A volume list response. The Books API omits `items` entirely when a page
/// is past the end of the result set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volumes {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

impl From<Volume> for MediaItem {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info.unwrap_or_default();

        MediaItem {
            id: volume.id,
            title: info.title,
            categories: info.categories,
            authors: info.authors,
            description: info.description,
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
            release_date: info.published_date,
        }
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// A movie entry within a TMDB list response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A paginated TMDB list response (recommendations or search)
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMoviePage {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub total_pages: u64,
}

/// TMDB movie details response, which carries full genre names
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: i64,
    pub name: String,
}

impl From<TmdbMovie> for MediaItem {
    fn from(movie: TmdbMovie) -> Self {
        MediaItem {
            id: movie.id.to_string(),
            title: movie.title,
            // List responses only carry genre ids; names require a details call
            categories: Vec::new(),
            authors: Vec::new(),
            description: movie.overview,
            thumbnail: movie.poster_path,
            release_date: movie.release_date,
        }
    }
}

impl From<TmdbMovieDetails> for MediaItem {
    fn from(details: TmdbMovieDetails) -> Self {
        MediaItem {
            id: details.id.to_string(),
            title: details.title,
            categories: details.genres.into_iter().map(|genre| genre.name).collect(),
            authors: Vec::new(),
            description: details.overview,
            thumbnail: details.poster_path,
            release_date: details.release_date,
        }
    }
}
