//! Movie domain entity

use chrono::NaiveDate;

/// A single catalog entry.
///
/// Owned by the backing store; the catalog only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    /// Release date
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    /// Release status, e.g. "Released"
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}
