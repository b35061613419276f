//! 电影实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub year: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub genre: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub writers: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub actors: Option<String>,
    pub average_score: f64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_movie(self) -> crate::models::movies::entities::Movie {
        crate::models::movies::entities::Movie {
            id: self.id,
            name: self.name,
            year: self.year,
            description: self.description,
            genre: self.genre,
            writers: self.writers,
            actors: self.actors,
            average_score: self.average_score,
            created_at: super::from_micros(self.created_at),
        }
    }
}
