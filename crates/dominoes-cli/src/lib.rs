//! Domino tile CLI library.
//!
//! This crate provides the command implementations behind the `dominoes`
//! binary: rendering a tile set, listing it, and working with style files.

pub mod commands;
pub mod input;
