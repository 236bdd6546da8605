//! Core library for the histmerge command line application.
//!
//! The library exposes high-level orchestration helpers that power the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: file parsing
//! and emission live under [`io`], data representations inside [`model`],
//! and the merge orchestration under [`merge`].

pub mod error;
pub mod io;
pub mod merge;
pub mod model;

pub use error::{MergeError, Result};
