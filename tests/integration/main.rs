//! Integration test harness.
//!
//! Requires a running PostgreSQL instance reachable at the URL in
//! `tests/fixtures/test_config.toml` (overridable via the
//! `SOCIETY_TEST_DATABASE_URL` environment variable).


mod booking_test;
mod chat_test;
mod lostfound_test;
mod maintenance_test;
mod poll_test;
mod resident_test;
