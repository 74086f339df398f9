//! Kernel utilities shared across crates.
//! Keep this crate lightweight: dictionary folds and layered config loading.
//!
//! ## Dict helpers
//! ```rust
//! # use std::collections::BTreeMap;
//! use uni_kernel::dict::reduce_dict;
//!
//! let masses = BTreeMap::from([("apple".to_owned(), 100_u32), ("grape".to_owned(), 5)]);
//! assert_eq!(reduce_dict(&masses, |total, mass, _| total + mass, 0_u32), 105);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use uni_kernel::config::load_config;
//! use uni_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(Some("campus.toml"))?;
//! ```
pub mod config;
pub mod dict;

pub use uni_domain as domain;
