mod auth_tests;
mod recordings_tests;
