//! regiondb-cli
//! ============
//!
//! Command-line interface for the `regiondb-core` decoder.
//!
//! This crate primarily provides a binary (`regiondb`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! regiondb extract --regions-title-dump dumps/0005001B-10052000 \
//!                  --iso-title-dump dumps/0005001B-1005C000 --out out/
//! regiondb -i out/regions.json stats
//! regiondb -i out/regions.json regions JP
//! regiondb -i out/regions.json search bayern
//! ```
//!
//! For programmatic access use [`regiondb-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
