//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from PostgreSQL.

mod activity;
mod member;
mod news;
mod role;
mod testimonial;
mod user;
