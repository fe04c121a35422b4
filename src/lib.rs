#![deny(unused_must_use)]
#![deny(clippy::clone_on_copy)]
#![warn(clippy::nursery, clippy::pedantic)]
#![warn(clippy::allow_attributes)]
#![allow(async_fn_in_trait)]
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    // Detection is not smart
    clippy::cognitive_complexity,
    // Sometimes useful
    clippy::enum_glob_use,
    clippy::wildcard_imports,
    clippy::multiple_crate_versions,
    clippy::single_call_fn,
    // Sometimes annoying
    clippy::use_self,
)]

pub mod application;
pub mod constant;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod utils;
