pub mod profile;

pub use profile::{Education, Experience, OwnerCard, Profile, ProfileWithOwner, SocialLinks};
