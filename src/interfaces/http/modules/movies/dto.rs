//! Movie DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Movie;
use crate::shared::PageResult;

/// A movie from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    /// Release date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            name: m.name,
            date: m.date,
            score: m.score,
            genre: m.genre,
            overview: m.overview,
            crew: m.crew,
            orig_title: m.orig_title,
            status: m.status,
            orig_lang: m.orig_lang,
            budget: m.budget,
            revenue: m.revenue,
            country: m.country,
        }
    }
}

/// One page of movies with navigation links
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieListResponse {
    /// Current page number (1-based)
    pub id: u64,
    pub movies: Vec<MovieResponse>,
    /// Link to the previous page, `null` on the first page
    pub prev_page: Option<String>,
    /// Link to the next page, `null` on the last page
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl From<PageResult<Movie>> for MovieListResponse {
    fn from(page: PageResult<Movie>) -> Self {
        Self {
            id: page.page,
            movies: page.items.into_iter().map(Into::into).collect(),
            prev_page: page.prev_link,
            next_page: page.next_link,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Query parameters of `GET /movies/`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Page number (starting at 1). Default: 1
    #[validate(range(min = 1))]
    #[param(minimum = 1)]
    pub page: Option<i64>,
    /// Items per page (1-100). Default: 10
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100)]
    pub per_page: Option<i64>,
}
