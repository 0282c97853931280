//! Pexels video search models and result selection.
//!
//! Contains the search request, the subset of the API response we read,
//! and the duration filter / resolution pick applied to it.

use serde::Deserialize;

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Parameters of one video search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text search query
    pub query: String,
    /// Pexels API key, sent verbatim in the Authorization header
    pub api_key: String,
    /// Number of videos requested (must be positive)
    pub per_page: u32,
    /// Minimum video duration in seconds (0 disables the filter)
    pub min_duration: u64,
}

impl SearchRequest {
    /// Create a request with the default page size and no duration filter.
    pub fn new(query: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            api_key: api_key.into(),
            per_page: DEFAULT_PER_PAGE,
            min_duration: 0,
        }
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the minimum duration in seconds.
    pub fn min_duration(mut self, seconds: u64) -> Self {
        self.min_duration = seconds;
        self
    }
}

/// Pexels `/videos/search` response.
#[derive(Debug, Deserialize)]
pub struct ApiSearchResponse {
    /// Videos on the requested page
    #[serde(default)]
    pub videos: Vec<ApiVideo>,
}

/// A single video record.
#[derive(Debug, Deserialize)]
pub struct ApiVideo {
    /// Video duration in seconds
    pub duration: u64,
    /// Available renditions, in provider order
    #[serde(default)]
    pub video_files: Vec<ApiVideoFile>,
}

/// One rendition of a video.
///
/// Pexels reports `null` dimensions for some HLS renditions.
#[derive(Debug, Deserialize)]
pub struct ApiVideoFile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Direct download link
    pub link: String,
}

impl ApiVideoFile {
    /// Pixel area, treating a missing dimension as zero.
    pub fn area(&self) -> u64 {
        u64::from(self.width.unwrap_or(0)) * u64::from(self.height.unwrap_or(0))
    }
}

impl ApiVideo {
    /// Rendition with the largest pixel area.
    ///
    /// Ties go to the first rendition in provider order. Returns `None`
    /// when the video has no renditions.
    pub fn highest_resolution(&self) -> Option<&ApiVideoFile> {
        // Iterator::max_by_key keeps the last maximum, we need the first.
        self.video_files
            .iter()
            .reduce(|best, file| if file.area() > best.area() { file } else { best })
    }
}

impl ApiSearchResponse {
    /// Collect the best download link of every video lasting at least
    /// `min_duration` seconds, preserving provider order.
    pub fn download_links(&self, min_duration: u64) -> Vec<String> {
        self.videos
            .iter()
            .filter(|video| video.duration >= min_duration)
            .filter_map(|video| {
                let best = video.highest_resolution();
                if best.is_none() {
                    tracing::warn!(
                        duration = video.duration,
                        "Skipping video without any video files"
                    );
                }
                best.map(|file| file.link.clone())
            })
            .collect()
    }
}
