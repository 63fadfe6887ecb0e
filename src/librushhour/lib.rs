// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a thread-safe registry of "rush hour" time spans on a 24-hour clock. Clients register closed spans `[start..end]` with `0 <= start <= end <= 24` and ask whether an instant falls inside any of them, from as many threads as they like.
//!
//! Clock readings are real numbers, either `f64` (the default) or `f32`, see [ClockBound](ops/trait.ClockBound.html). Invalid inputs are reported with [RegistryError](error/enum.RegistryError.html) and a `tracing` warning; the registry stays usable.
//!
//! # Examples
//!
//! ```rust
//! use rushhour::SpanRegistry;
//! use std::thread;
//!
//! let registry: SpanRegistry = SpanRegistry::new();
//! thread::scope(|s| {
//!   s.spawn(|| registry.insert(10.0, 12.0));
//!   s.spawn(|| registry.insert(8.0, 15.0));
//! });
//! assert!(registry.contains(14.59));
//! assert!(!registry.contains(6.0));
//! ```
//!
//! For details see the [registry module](registry/index.html) or the [span module](span/index.html).

pub mod error;
pub mod ops;
pub mod registry;
pub mod span;

pub use crate::error::RegistryError;
pub use crate::registry::SpanRegistry;
pub use crate::span::TimeSpan;
