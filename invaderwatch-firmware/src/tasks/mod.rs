//! Embassy tasks

pub mod face;
pub mod tick;
