//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod activities;
pub mod auth;
pub mod health;
pub mod members;
pub mod news;
pub mod testimonials;
pub mod users;
