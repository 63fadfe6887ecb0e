// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Input validation failures. None of them leaves the registry unusable.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegistryError<Bound = f64>
{
  #[error("time span [{start}..{end}] is not an ordered range of the 24-hour clock")]
  OutOfRangeInterval { start: Bound, end: Bound },
  #[error("instant {instant} is not on the 24-hour clock")]
  OutOfRangeInstant { instant: Bound },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    let e: RegistryError = RegistryError::OutOfRangeInterval { start: 10.0, end: 9.0 };
    assert_eq!(e.to_string(), "time span [10..9] is not an ordered range of the 24-hour clock");
    let e: RegistryError<f32> = RegistryError::OutOfRangeInstant { instant: -1.5 };
    assert_eq!(e.to_string(), "instant -1.5 is not on the 24-hour clock");
  }
}
