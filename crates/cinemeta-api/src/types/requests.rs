//! Typed request parameters that lower to [`QueryParam`] lists.

use std::fmt;

use chrono::NaiveDate;

use crate::params::QueryParam;

// --- Search Parameters ---

/// Parameters for `search/tv` endpoint.
#[derive(Debug, Clone)]
pub struct SearchTvParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by first air date year.
    pub first_air_date_year: Option<u32>,
    /// Filter by year (searches first air date and episode air dates).
    pub year: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchTvParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            first_air_date_year: None,
            year: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the first air date year filter.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: u32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Includes adult results.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = include;
        self
    }

    /// Lowers to query parameters.
    #[must_use]
    pub fn to_params(&self) -> Vec<QueryParam> {
        let mut params = vec![
            QueryParam::single("query", &self.query),
            QueryParam::single("language", &self.language),
            QueryParam::single("page", self.page),
            QueryParam::single("include_adult", self.include_adult),
        ];
        if let Some(year) = self.first_air_date_year {
            params.push(QueryParam::single("first_air_date_year", year));
        }
        if let Some(year) = self.year {
            params.push(QueryParam::single("year", year));
        }
        params
    }
}

/// Parameters for `search/movie` endpoint.
#[derive(Debug, Clone)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by primary release year.
    pub primary_release_year: Option<u32>,
    /// Filter by year.
    pub year: Option<u32>,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            primary_release_year: None,
            year: None,
            region: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the primary release year filter.
    #[must_use]
    pub const fn primary_release_year(mut self, year: u32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Lowers to query parameters.
    #[must_use]
    pub fn to_params(&self) -> Vec<QueryParam> {
        let mut params = vec![
            QueryParam::single("query", &self.query),
            QueryParam::single("language", &self.language),
            QueryParam::single("page", self.page),
            QueryParam::single("include_adult", self.include_adult),
        ];
        if let Some(year) = self.primary_release_year {
            params.push(QueryParam::single("primary_release_year", year));
        }
        if let Some(year) = self.year {
            params.push(QueryParam::single("year", year));
        }
        if let Some(ref region) = self.region {
            params.push(QueryParam::single("region", region));
        }
        params
    }
}

// --- Change Windows ---

/// Date window for change-history endpoints (at most 14 days upstream).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangesWindow {
    /// First day to include.
    pub start_date: Option<NaiveDate>,
    /// Last day to include.
    pub end_date: Option<NaiveDate>,
    /// Result page.
    pub page: Option<u32>,
}

impl ChangesWindow {
    /// Window covering `start..=end`.
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            page: None,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Lowers to query parameters (`YYYY-MM-DD` dates).
    #[must_use]
    pub fn to_params(&self) -> Vec<QueryParam> {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(QueryParam::single("start_date", start.format("%Y-%m-%d")));
        }
        if let Some(end) = self.end_date {
            params.push(QueryParam::single("end_date", end.format("%Y-%m-%d")));
        }
        if let Some(page) = self.page {
            params.push(QueryParam::single("page", page));
        }
        params
    }
}

// --- Enumerated path and query values ---

/// External ID namespace for `find/{external_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalSource {
    /// `imdb_id`
    Imdb,
    /// `facebook_id`
    Facebook,
    /// `instagram_id`
    Instagram,
    /// `tvdb_id`
    Tvdb,
    /// `tiktok_id`
    Tiktok,
    /// `twitter_id`
    Twitter,
    /// `wikidata_id`
    Wikidata,
    /// `youtube_id`
    Youtube,
}

impl ExternalSource {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imdb => "imdb_id",
            Self::Facebook => "facebook_id",
            Self::Instagram => "instagram_id",
            Self::Tvdb => "tvdb_id",
            Self::Tiktok => "tiktok_id",
            Self::Twitter => "twitter_id",
            Self::Wikidata => "wikidata_id",
            Self::Youtube => "youtube_id",
        }
    }
}

impl fmt::Display for ExternalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trending aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    Week,
}

impl TimeWindow {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
