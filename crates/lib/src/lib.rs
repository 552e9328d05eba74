//! stubkit-lib: logic behind the stubkit binaries
//!
//! This crate provides two unrelated pieces:
//! - `stub`: a stand-in for Qt's code generators (`moc`, `uic`, ...) that only
//!   produces the output file a build graph expects
//! - `export`: the export/launch fixture that writes `<base>/bat/game.bat`
//!   unless the base path is Windows-style on a non-Windows host

pub mod consts;
pub mod export;
pub mod platform;
pub mod stub;
