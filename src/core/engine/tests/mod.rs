//! Engine unit tests

mod fixtures;

mod credential_tests;
mod tier_tests;
