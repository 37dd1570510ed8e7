//! Core domain types: the job posting model and the crate error type.

pub mod error;
pub mod job;

pub use error::{JobflowError, Result};
pub use job::{Job, JobPage, PageLink};
