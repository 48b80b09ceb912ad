#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset;
pub mod config;
pub mod error;
pub mod flavor;
pub mod resolve;
pub mod rewrite;

pub use asset::{AssetKind, rewrite_asset, rewrite_asset_with};
pub use config::RewriterConfig;
pub use error::RewriteError;
pub use flavor::ManifestFlavor;
pub use resolve::{DependencyOptions, DependencyReference, DependencyResolver};
pub use rewrite::{RewriteOutcome, rewrite_manifest};
