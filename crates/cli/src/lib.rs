// crates/cli/src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// windows-sys: notify と clap/env_logger で異なるバージョン
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod runner;
pub mod settings;
pub mod snapshot;
pub mod watch;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
