#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains everything which is shared by the crates of this workspace.

mod error;

pub use error::{QsError, QsResult};

pub mod logging;
pub mod util;
