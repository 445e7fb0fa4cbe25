//! Domain traits (ports)

mod repositories;

pub use repositories::{
    ActivityRepository, MemberRepository, NewsRepository, RepoResult, RoleRepository,
    TestimonialRepository, UserRepository,
};
