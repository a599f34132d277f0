//! Pluggable obfuscation layer for asset bundle files.
//!
//! Two interchangeable schemes keep packaged bundles from opening in
//! generic archive tools:
//!
//! - **stream**: whole-file XOR with a fixed single-byte key, undone
//!   transparently by a transform-on-read stream at load time;
//! - **offset**: 32 bytes of padding prepended at build time, skipped by
//!   loading the file at a byte offset — content bytes are never touched.
//!
//! The crate supplies the byte transforms, the stream wrapper, and the
//! provider traits; actually turning bytes into a usable bundle is the
//! job of an external [`BundleLoader`](crate::core::traits::loader::BundleLoader)
//! implementation, which also verifies checksums. Both blocking and
//! pending-request load paths are supported and produce equivalent
//! results.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
