//! 2048 rules engine (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so hosts can depend on a
//! single package: `twenty48::{core, engine, types}`.

pub use twenty48_core as core;
pub use twenty48_engine as engine;
pub use twenty48_types as types;
