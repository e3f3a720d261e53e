//! Task orchestration for hearth frontend builds.
//!
//! This crate sequences the build pipeline around the configuration
//! engine in `hearth-bundler`:
//!
//! clean, translation merge, icon generation and translation build in
//! parallel, static copy, bundle, post-process.
//!
//! Icon generation and translation building are the only steps declared
//! parallel; they write to disjoint output locations, which is the
//! correctness argument for running them without coordination. Everything
//! else runs strictly sequentially.

pub mod clean;
pub mod entry_html;
pub mod icons;
pub mod sequence;
pub mod service_worker;
pub mod statics;
pub mod translations;
pub mod watch;

mod error;

pub use error::{Result, TaskError};
pub use sequence::{build, develop, BuildContext};
pub use watch::watch;
