//! Site domain module.
//!
//! Server-rendered pages of the directory: routing, localized copy, the
//! document layout and the tool submission form.

mod copy;
mod error;
mod layout;
mod pages;
mod routes;
mod submit;

pub use copy::{Messages, PageCopy};
pub use error::SiteError;
pub use layout::{PageLocale, PageMeta, auth_fragment, document, hero, search_box};
pub use pages::{PageResponse, PageStatus, Site};
pub use routes::{SEARCH_PATH, SiteRoute};
pub use submit::{FieldError, Submission, SubmissionCategory};
