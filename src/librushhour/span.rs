// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed time span on the 24-hour clock.
//!
//! A span `[start..end]` is only built through validation: both bounds must be readings of the clock and `start <= end`. The degenerate span `[24..24]` is valid and contains exactly the instant `24`.
//!
//! # Examples
//!
//! ```rust
//! use rushhour::TimeSpan;
//!
//! let morning = TimeSpan::new(8.0, 10.5).unwrap();
//! assert!(morning.member(8.0));
//! assert!(morning.member(10.5));
//! assert!(!morning.member(10.51));
//! assert!(TimeSpan::new(10.0, 9.0).is_err());
//! ```

use crate::error::RegistryError;
use crate::ops::ClockBound;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeSpan<Bound = f64>
{
  start: Bound,
  end: Bound
}

impl<Bound: ClockBound> TimeSpan<Bound>
{
  pub fn new(start: Bound, end: Bound) -> Result<TimeSpan<Bound>, RegistryError<Bound>> {
    if start.on_clock() && end.on_clock() && start <= end {
      Ok(TimeSpan { start: start.normalize(), end: end.normalize() })
    }
    else {
      Err(RegistryError::OutOfRangeInterval { start: start, end: end })
    }
  }

  pub fn start(&self) -> Bound {
    self.start
  }

  pub fn end(&self) -> Bound {
    self.end
  }

  /// Both bounds are included.
  pub fn member(&self, instant: Bound) -> bool {
    instant >= self.start && instant <= self.end
  }
}

impl<Bound: ClockBound> TryFrom<(Bound, Bound)> for TimeSpan<Bound>
{
  type Error = RegistryError<Bound>;

  fn try_from((start, end): (Bound, Bound)) -> Result<Self, Self::Error> {
    TimeSpan::new(start, end)
  }
}

// Validated spans hold neither NaN nor -0.0, so the total order agrees with `==`.
impl<Bound: ClockBound> Eq for TimeSpan<Bound> {}

impl<Bound: ClockBound> Ord for TimeSpan<Bound>
{
  fn cmp(&self, other: &TimeSpan<Bound>) -> Ordering {
    self.start.total_cmp(&other.start)
      .then_with(|| self.end.total_cmp(&other.end))
  }
}

impl<Bound: ClockBound> PartialOrd for TimeSpan<Bound>
{
  fn partial_cmp(&self, other: &TimeSpan<Bound>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<Bound> Collection for TimeSpan<Bound>
{
  type Item = Bound;
}

impl<Bound: ClockBound> Bounded for TimeSpan<Bound>
{
  fn lower(&self) -> Bound {
    self.start
  }

  fn upper(&self) -> Bound {
    self.end
  }
}

impl<Bound: ClockBound> Contains for TimeSpan<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    self.member(*value)
  }
}

impl<Bound: ClockBound> Display for TimeSpan<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "[{}..{}]", self.start, self.end)
  }
}

impl<Bound> Serialize for TimeSpan<Bound> where
 Bound: ClockBound + Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (self.start, self.end).serialize(serializer)
  }
}

impl<'de, Bound> Deserialize<'de> for TimeSpan<Bound> where
 Bound: ClockBound + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let (start, end) = <(Bound, Bound)>::deserialize(deserializer)?;
    TimeSpan::new(start, end).map_err(de::Error::custom)
  }
}
