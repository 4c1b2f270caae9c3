//! Data model shared by every pipeline stage
//!
//! # Components
//!
//! - `Company`: an input row (name and raw website)
//! - `JobPosting`: one extracted posting, unique by URL
//! - `StatusCode`: the outcome recorded for a company
//! - `CompanyResult` / `Rank`: the final, ordered output record

mod company;
mod result;
mod status;

pub use company::{Company, JobPosting, NOT_DEFINED};
pub use result::{sort_results, CompanyResult, Rank};
pub use status::StatusCode;
