//! Integration tests for Career-Scout
//!
//! These tests use wiremock to create mock HTTP servers standing in for
//! company sites, ATS boards and LinkedIn, and run the discovery pipeline
//! end-to-end against them.

mod pipeline_tests;
mod run_tests;
mod support;
