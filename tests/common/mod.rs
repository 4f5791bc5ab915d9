// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: not every test binary uses every helper
#[allow(unused_imports)]
pub use fixtures::{TestAssets, TestContent};
#[allow(unused_imports)]
pub use helpers::{
    body_string, browser_cookie, create_test_app, create_test_app_with, create_test_services,
    create_test_services_with, get, post_json, request_count,
};
