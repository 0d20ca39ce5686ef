use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    pub year: u32,
    pub number_of_seasons: Option<u32>,
    /// NULL means "no opinion"; new rows default to true.
    pub worth_a_watch: Option<bool>,
    pub album_name: Option<String>,
    pub duration: Option<u32>,
    pub artist: Option<String>,
    pub created: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
