//! News model -> entity mapper

use ngo_core::entities::News;

use crate::models::NewsModel;

impl From<NewsModel> for News {
    fn from(model: NewsModel) -> Self {
        News {
            id: model.id,
            name: model.name,
            content: model.content,
            image: model.image,
            category_id: model.category_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
