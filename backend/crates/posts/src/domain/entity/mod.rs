pub mod post;

pub use post::{AuthorCard, Comment, Like, Post};
