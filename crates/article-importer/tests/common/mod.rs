//! Shared test utilities for article-importer integration tests.
//!
//! This module provides:
//! - Builders for category trees and import requests
//! - Scripted transports and a one-shot local HTTP endpoint

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::*;
