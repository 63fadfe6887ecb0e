// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Clock bound specific operations.

use num_traits::Float;
use num_traits::float::TotalOrder;
use std::fmt::{Debug, Display};

/// Real type usable as a reading of the 24-hour clock.
///
/// Readings live in the closed range `[day_start(), day_end()]`. `NaN` is never inside it.
pub trait ClockBound : Float + TotalOrder + Debug + Display
{
  fn day_start() -> Self;
  fn day_end() -> Self;

  fn on_clock(self) -> bool {
    self >= Self::day_start() && self <= Self::day_end()
  }

  /// `-0.0` and `0.0` denote the same reading, they are collapsed to `0.0`.
  fn normalize(self) -> Self {
    self + Self::zero()
  }
}

macro_rules! clock_bound_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl ClockBound for $t
    {
      fn day_start() -> $t {
        0.0
      }

      fn day_end() -> $t {
        24.0
      }
    }
  )*}
}

clock_bound_impl!(f32, f64);
