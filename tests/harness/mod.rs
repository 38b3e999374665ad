#![allow(dead_code, unused_imports)]


pub(crate) use release_server::{FAKE_TAILWIND_BINARY, ReleaseServer};
pub(crate) use test_context::TestContext;
