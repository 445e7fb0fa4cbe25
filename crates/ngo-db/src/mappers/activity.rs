//! Activity model -> entity mapper

use ngo_core::entities::Activity;

use crate::models::ActivityModel;

impl From<ActivityModel> for Activity {
    fn from(model: ActivityModel) -> Self {
        Activity {
            id: model.id,
            name: model.name,
            content: model.content,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
