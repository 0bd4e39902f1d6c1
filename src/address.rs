//! Memory-address labels for the board's gutter.
//!
//! These are pure decoration: a random starting address followed by small
//! random strides. Labels are printed as plain uppercase hex with no padding,
//! so a run that climbs past `0xFFFF` gets a wider label.

use std::ops::RangeInclusive;

use rand::distributions::Uniform;
use rand::Rng;

/// The range the first address is drawn from.
pub const START: RangeInclusive<u32> = 61440..=63359;

/// The range each stride between consecutive addresses is drawn from.
pub const STRIDE: RangeInclusive<u32> = 0..=63;

/// Generates `count` ascending addresses.
pub fn addresses(count: usize, rng: &mut impl Rng) -> Vec<u32> {
  let stride = Uniform::from(STRIDE);
  let mut addr = rng.gen_range(START);
  let mut out = Vec::with_capacity(count);
  for i in 0..count {
    if i > 0 {
      addr += rng.sample(&stride);
    }
    out.push(addr);
  }

  if let (Some(first), Some(last)) = (out.first(), out.last()) {
    log::debug!("address labels run {:X}..={:X}", first, last);
  }
  out
}

/// Generates `count` address labels, formatted as uppercase hex.
pub fn labels(count: usize, rng: &mut impl Rng) -> Vec<String> {
  addresses(count, rng)
    .into_iter()
    .map(|a| format!("{:X}", a))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng as _;

  #[test]
  fn zero_labels() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(labels(0, &mut rng).is_empty());
  }

  proptest! {
    #[test]
    fn labels_ascend_from_start(seed in any::<u64>()) {
      let mut rng = StdRng::seed_from_u64(seed);
      let labels = labels(34, &mut rng);
      prop_assert_eq!(labels.len(), 34);

      let values = labels
        .iter()
        .map(|l| u32::from_str_radix(l, 16))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
      prop_assert!(START.contains(&values[0]));
      for pair in values.windows(2) {
        prop_assert!(pair[0] <= pair[1]);
        prop_assert!(pair[1] - pair[0] <= *STRIDE.end());
      }
      for label in &labels {
        prop_assert!(label.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
      }
    }
  }
}
