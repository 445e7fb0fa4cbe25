//! User model -> entity mapper

use ngo_core::entities::{Role, User};

use crate::models::UserWithRoleModel;

impl From<UserWithRoleModel> for User {
    fn from(model: UserWithRoleModel) -> Self {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            photo: model.photo,
            role: Role {
                id: model.role_id,
                name: model.role_name,
                description: model.role_description,
            },
            deleted: model.deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
