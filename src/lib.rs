//! # Simple Recipes
//!
//! Turns a directory of plain-text recipes into static HTML pages plus one
//! index page that mirrors the directory tree. The filesystem is the data
//! source: every `Name/Name.txt` becomes `Name/Name.html`, and any folder
//! holding a page named after itself shows up in the index as a recipe.
//!
//! # Pipeline
//!
//! ```text
//! 1. Convert   **/Name.txt  →  **/Name.html   (parse + render, written in place)
//! 2. Index     directory tree  →  Index.html  (nested list of recipe folders)
//! ```
//!
//! The index is built from the tree structure alone, after every page is
//! written, so it also picks up hand-made pages that follow the
//! `Name/Name.html` convention.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`recipe`] | Line-oriented recipe parser producing [`recipe::Recipe`] |
//! | [`render`] | Recipe page HTML with Maud; image discovery and stylesheet links |
//! | [`convert`] | Stage 1: walks the root and converts every recipe file |
//! | [`index`] | Stage 2: builds and writes the index page |
//! | [`config`] | Optional root `config.toml`, loaded over stock defaults |
//! | [`output`] | Console progress formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! Generation is a pure function of the directory contents: running twice on
//! unchanged input writes byte-identical files.

pub mod config;
pub mod convert;
pub mod index;
pub mod logging;
pub mod output;
pub mod recipe;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
