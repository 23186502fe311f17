//! # rlp-encode-cli
//!
//! The `rlpe` command-line tool.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod args;
pub mod cmd;
pub mod config;
pub mod handler;
pub mod stdin;
pub mod utils;
