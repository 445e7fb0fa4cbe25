//! Member model -> entity mapper

use ngo_core::entities::Member;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            name: model.name,
            facebook_url: model.facebook_url,
            instagram_url: model.instagram_url,
            linkedin_url: model.linkedin_url,
            image: model.image,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
