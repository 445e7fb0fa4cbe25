//! Testimonial model -> entity mapper

use ngo_core::entities::Testimonial;

use crate::models::TestimonialModel;

impl From<TestimonialModel> for Testimonial {
    fn from(model: TestimonialModel) -> Self {
        Testimonial {
            id: model.id,
            name: model.name,
            image: model.image,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
