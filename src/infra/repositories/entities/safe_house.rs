//! `safe_houses` table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::SafeHouse;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "safe_houses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub postal_code: String,
    #[sea_orm(column_type = "Text")]
    pub number: String,
    #[sea_orm(column_type = "Text")]
    pub complement: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SafeHouse {
    fn from(model: Model) -> Self {
        SafeHouse::restore(model.id, model.postal_code, model.number, model.complement)
    }
}

impl From<&SafeHouse> for ActiveModel {
    fn from(safe_house: &SafeHouse) -> Self {
        Self {
            id: Set(safe_house.id()),
            postal_code: Set(safe_house.postal_code().to_string()),
            number: Set(safe_house.number().to_string()),
            complement: Set(safe_house.complement().to_string()),
        }
    }
}
