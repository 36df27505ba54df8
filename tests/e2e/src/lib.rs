//! End-to-end harness: boots the web server in local mode and drives it over HTTP or Chrome.

pub mod browser;
pub mod test_server;
