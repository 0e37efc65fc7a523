//! Turn a sketch of a folder structure into real directories and files.
//!
//! The sketch can be a `tree`-style drawing, an indented outline or a YAML/JSON document. It is
//! parsed into a [`Node`] tree, which a [`Generator`] then creates under a base directory.
pub mod api;
pub mod config;
pub mod drawing;
pub mod errors;
pub mod generator;
pub mod line;
pub mod node;
pub mod notation;
pub mod outline;
pub mod policy;
pub mod preview;
pub mod structured;

pub use api::{export, generate, parse, scaffold, ScaffoldError};
pub use config::Settings;
pub use generator::{Generator, Report};
pub use node::{Node, NodeKind};
pub use notation::Notation;
