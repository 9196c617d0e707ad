//! Tests for HTTP controller endpoints.
//!
//! Handlers are either called directly with their extractors or driven through the router
//! when the request body needs to be parsed, as for multipart uploads.

mod company;
mod search;
mod spend;
mod upload;

use portfolio_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{self, body_json, body_text};
