//! `users` table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
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

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User::restore(model.id, model.name, model.email, model.password_hash)
    }
}

impl From<&User> for ActiveModel {
    fn from(identity: &User) -> Self {
        Self {
            id: Set(identity.id()),
            name: Set(identity.name().to_string()),
            email: Set(identity.email().to_string()),
            password_hash: Set(identity.password_hash().as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::TryIntoModel;

    #[test]
    fn test_active_model_maps_back_to_equal_user() {
        let long_name = "J".repeat(500);
        let user = User::new(&long_name, "jane@example.com", "abcdef").unwrap();

        let model = ActiveModel::from(&user).try_into_model().unwrap();

        assert_eq!(model.name.len(), 500);
        assert_eq!(User::from(model), user);
    }
}
