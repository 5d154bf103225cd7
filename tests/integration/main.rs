//! Integration tests for sesh

mod cli_test;
mod convert_test;
mod helpers;
mod sanitize_test;
