//! Story views for the demo application.

mod demo;
mod sample;
mod stories;

pub use demo::DemoView;
pub use sample::{sample_records, sample_users, user_columns, User};
pub use stories::{Story, StoryCatalog, StoryContent, StoryOptions, TableGallery};
