//! Core library for the dataroom-reports command line application.
//!
//! The library exposes the report export pipeline that powers the
//! command-line interface as well as the integration tests. The modules are
//! structured to keep responsibilities narrow and composable: IO adapters live
//! under [`dataroom::reports::io`], the assembled input tree inside
//! [`dataroom::reports::model`], the sheet flattening logic in
//! [`dataroom::reports::flatten`], and the export orchestration under
//! [`dataroom::reports::export`].

pub mod dataroom;

pub use dataroom::reports::{ExportError, Result, error, export, flatten, io, model};
