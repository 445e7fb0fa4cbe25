//! Entity to DTO mappers
//!
//! `From` conversions from domain entities to response DTOs.

use ngo_core::entities::{Activity, Member, News, Testimonial, User};

use super::responses::{
    ActivityResponse, MemberResponse, NewsResponse, TestimonialResponse, UserResponse,
};

impl From<&Testimonial> for TestimonialResponse {
    fn from(t: &Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            image: t.image.clone(),
            content: t.content.clone(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self::from(&t)
    }
}

impl From<&Member> for MemberResponse {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            facebook_url: m.facebook_url.clone(),
            instagram_url: m.instagram_url.clone(),
            linkedin_url: m.linkedin_url.clone(),
            image: m.image.clone(),
            description: m.description.clone(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self::from(&m)
    }
}

impl From<&News> for NewsResponse {
    fn from(n: &News) -> Self {
        Self {
            id: n.id,
            name: n.name.clone(),
            content: n.content.clone(),
            image: n.image.clone(),
            category_id: n.category_id,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

impl From<&Activity> for ActivityResponse {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            content: a.content.clone(),
            image: a.image.clone(),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
            photo: u.photo.clone(),
            role: u.role.name.clone(),
            created_at: u.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self::from(&u)
    }
}
