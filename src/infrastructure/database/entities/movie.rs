//! Movie entity

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Movie model - one row of the catalog
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    /// Assigned by the source dataset, not generated
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    pub name: String,

    /// Release date
    pub date: NaiveDate,

    /// Audience score
    #[sea_orm(column_type = "Double")]
    pub score: f64,

    pub genre: String,

    #[sea_orm(column_type = "Text")]
    pub overview: String,

    /// Comma-separated cast and crew
    #[sea_orm(column_type = "Text")]
    pub crew: String,

    pub orig_title: String,

    pub status: String,

    pub orig_lang: String,

    #[sea_orm(column_type = "Double")]
    pub budget: f64,

    #[sea_orm(column_type = "Double")]
    pub revenue: f64,

    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
