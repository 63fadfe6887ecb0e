// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thread-safe registry of rush hour time spans.
//!
//! The registry stores distinct closed spans ordered by start then end. Overlapping spans are kept as separate entries, for example `[8..15]` and `[10..12]` are both stored. A query is a linear scan over the stored spans, bounds included.
//!
//! A single reader-writer lock guards the set: `insert` is the only writer, every other operation reads. Inputs are validated before the lock is taken, and logging happens after it is released.
//!
//! # Examples
//!
//! ```rust
//! use rushhour::SpanRegistry;
//!
//! let registry: SpanRegistry = SpanRegistry::new();
//! registry.insert(10.0, 12.0).unwrap();
//! assert!(registry.contains(10.30));
//! assert!(!registry.contains(12.01));
//!
//! registry.insert(8.0, 15.0).unwrap();
//! assert!(registry.contains(12.01));
//! assert_eq!(registry.len(), 2);
//!
//! // Rejected inputs never reach the set.
//! assert!(registry.insert(10.0, 9.0).is_err());
//! assert!(!registry.contains(25.0));
//! assert_eq!(registry.len(), 2);
//! ```

use crate::error::RegistryError;
use crate::ops::ClockBound;
use crate::span::TimeSpan;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::iter::FromIterator;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct SpanRegistry<Bound = f64>
{
  spans: RwLock<BTreeSet<TimeSpan<Bound>>>
}

impl<Bound: ClockBound> SpanRegistry<Bound>
{
  pub fn new() -> SpanRegistry<Bound> {
    SpanRegistry {
      spans: RwLock::new(BTreeSet::new())
    }
  }

  // A panicking writer cannot leave the set half-updated, so a poisoned lock is still usable.
  fn read(&self) -> RwLockReadGuard<'_, BTreeSet<TimeSpan<Bound>>> {
    self.spans.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, BTreeSet<TimeSpan<Bound>>> {
    self.spans.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Registers the span `[start..end]`.
  ///
  /// Returns `Ok(false)` if the very same span was already registered, the registry is then unchanged.
  ///
  /// # Errors
  ///
  /// [`RegistryError::OutOfRangeInterval`] if a bound is outside `[0..24]` or `start > end`. Nothing is inserted.
  pub fn insert(&self, start: Bound, end: Bound) -> Result<bool, RegistryError<Bound>> {
    let span = TimeSpan::new(start, end).map_err(|e| {
      warn!(error = %e, "time span rejected");
      e
    })?;
    let added = self.write().insert(span);
    debug!(span = %span, added, "time span registered");
    Ok(added)
  }

  /// Checks whether `instant` falls inside at least one registered span.
  ///
  /// # Errors
  ///
  /// [`RegistryError::OutOfRangeInstant`] if `instant` is outside `[0..24]`.
  pub fn try_contains(&self, instant: Bound) -> Result<bool, RegistryError<Bound>> {
    if !instant.on_clock() {
      return Err(RegistryError::OutOfRangeInstant { instant: instant });
    }
    let spans = self.read();
    if spans.is_empty() {
      return Ok(false);
    }
    Ok(spans.iter().any(|span| span.member(instant)))
  }

  /// Same as `try_contains` except that an instant outside the clock is logged and answered with `false`.
  pub fn contains(&self, instant: Bound) -> bool {
    match self.try_contains(instant) {
      Ok(found) => found,
      Err(e) => {
        warn!(error = %e, "rush hour query rejected");
        false
      }
    }
  }

  /// Snapshot of the registered spans, ordered by start then end.
  pub fn spans(&self) -> Vec<TimeSpan<Bound>> {
    self.read().iter().cloned().collect()
  }

  pub fn len(&self) -> usize {
    self.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  /// Logs every registered span, or a warning when there is none.
  pub fn report(&self) {
    let spans = self.spans();
    if spans.is_empty() {
      warn!("no rush hours are registered");
    }
    for span in &spans {
      info!(span = %span, "rush hour");
    }
  }
}

impl<Bound: ClockBound> Default for SpanRegistry<Bound>
{
  fn default() -> SpanRegistry<Bound> {
    SpanRegistry::new()
  }
}

impl<Bound: ClockBound> Extend<TimeSpan<Bound>> for SpanRegistry<Bound>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=TimeSpan<Bound>>
  {
    self.spans.get_mut()
      .unwrap_or_else(PoisonError::into_inner)
      .extend(iterable);
  }
}

impl<Bound: ClockBound> FromIterator<TimeSpan<Bound>> for SpanRegistry<Bound>
{
  fn from_iter<I>(iterable: I) -> SpanRegistry<Bound> where
   I: IntoIterator<Item=TimeSpan<Bound>>
  {
    let mut registry = SpanRegistry::new();
    registry.extend(iterable);
    registry
  }
}

impl<Bound> Collection for SpanRegistry<Bound>
{
  type Item = Bound;
}

impl<Bound: ClockBound> Contains for SpanRegistry<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    SpanRegistry::contains(self, *value)
  }
}

impl<Bound: ClockBound> Cardinality for SpanRegistry<Bound>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

/// Exported as the sequence of its spans, in order. The lock is released before serializing.
impl<Bound> Serialize for SpanRegistry<Bound> where
 Bound: ClockBound + Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.spans())
  }
}
