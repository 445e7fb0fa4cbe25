//! Role model -> entity mapper

use ngo_core::entities::Role;

use crate::models::RoleModel;

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
