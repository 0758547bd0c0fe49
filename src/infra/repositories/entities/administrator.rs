//! `administrators` table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Administrator;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "administrators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Administrator {
    fn from(model: Model) -> Self {
        Administrator::restore(model.id, model.name, model.email, model.password_hash)
    }
}

impl From<&Administrator> for ActiveModel {
    fn from(identity: &Administrator) -> Self {
        Self {
            id: Set(identity.id()),
            name: Set(identity.name().to_string()),
            email: Set(identity.email().to_string()),
            password_hash: Set(identity.password_hash().as_str().to_string()),
        }
    }
}
