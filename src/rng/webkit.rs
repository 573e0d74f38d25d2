//! Legacy browser key-stream generator.
//!
//! Reimplements the WebKit2 "square and OR" recurrence described at
//! <https://bocoup.com/blog/random-numbers> (theory:
//! <http://dl.acm.org/citation.cfm?id=752741>): each draw advances the seed by
//! `seed += (seed * seed) | 5` and reads the new state back as the fraction
//! `seed / 2^32`. All arithmetic here is fixed at 32-bit unsigned wraparound,
//! which keeps every fraction strictly inside `[0, 1)`.
//!
//! The recurrence is statistically weak and trivially predictable from a
//! single observed state. It exists so that keys minted by a legacy front-end
//! can be regenerated and audited; anything it emits is compromised the
//! moment one state leaks.

use rand::Rng;

/// 2^32 as a float; maps the 32-bit state onto the unit interval.
const SEED_SPAN: f64 = 4_294_967_296.0;

/// Pseudo-random fraction stream driven by a single 32-bit seed.
///
/// A new generator is unseeded (state 0) until [`set_seed`](Self::set_seed)
/// runs; from then on every [`next_fraction`](Self::next_fraction) call
/// rewrites the seed in place. Instances are cheap and single-owner: never
/// share one between concurrently advancing callers.
#[derive(Debug, Clone)]
pub struct WebkitRng {
	/// Current recurrence state; overwritten on every draw.
	seed: u32,
}

impl WebkitRng {
	/// Create an unseeded generator. Seed it before drawing.
	pub fn new() -> Self {
		Self { seed: 0 }
	}

	/// Overwrite the seed with an explicit value, or with a fresh draw from
	/// the process RNG scaled to the 32-bit domain when `None`.
	///
	/// Every value is accepted, including 0.
	pub fn set_seed(&mut self, seed: Option<u32>) {
		self.seed = seed.unwrap_or_else(Self::entropy_seed);
	}

	/// Current seed value.
	pub fn seed(&self) -> u32 {
		self.seed
	}

	/// Advance the recurrence once and return the new state as a fraction in
	/// `[0, 1)`.
	///
	/// The square wraps at 32 bits; `| 5` keeps the increment nonzero so the
	/// state always moves. The stream is not restartable without re-seeding.
	pub fn next_fraction(&mut self) -> f64 {
		self.seed = self
			.seed
			.wrapping_add(self.seed.wrapping_mul(self.seed) | 5);
		f64::from(self.seed) / SEED_SPAN
	}

	/// `round(uniform * 2^32)` wrapped back into the 32-bit domain.
	///
	/// The rounded draw can land on 2^32 exactly; the truncating cast maps
	/// that boundary case to 0.
	fn entropy_seed() -> u32 {
		let uniform: f64 = rand::rng().random();
		(uniform * SEED_SPAN).round() as u64 as u32
	}
}

impl Default for WebkitRng {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_one_yields_pinned_first_fraction() {
		let mut rng = WebkitRng::new();
		rng.set_seed(Some(1));
		assert_eq!(rng.next_fraction(), 6.0 / 4_294_967_296.0);
		assert_eq!(rng.seed(), 6);
	}

	#[test]
	fn state_walk_from_seed_one_matches_pins() {
		let mut rng = WebkitRng::new();
		rng.set_seed(Some(1));
		let mut states = Vec::new();
		for _ in 0..8 {
			rng.next_fraction();
			states.push(rng.seed());
		}
		assert_eq!(
			states,
			vec![
				6,
				43,
				1896,
				3_596_717,
				4_230_246_554,
				150_703_423,
				1_081_344_708,
				3_256_592_601
			]
		);
	}

	#[test]
	fn max_seed_wraps_instead_of_overflowing() {
		let mut rng = WebkitRng::new();
		rng.set_seed(Some(u32::MAX));
		// (2^32 - 1)^2 wraps to 1, 1 | 5 = 5, and MAX + 5 wraps to 4.
		assert_eq!(rng.next_fraction(), 4.0 / 4_294_967_296.0);
		assert_eq!(rng.seed(), 4);
	}

	#[test]
	fn zero_seed_is_accepted_and_advances() {
		let mut rng = WebkitRng::new();
		rng.set_seed(Some(0));
		assert_eq!(rng.next_fraction(), 5.0 / 4_294_967_296.0);
		assert_eq!(rng.seed(), 5);
	}

	#[test]
	fn same_seed_means_same_stream() {
		let mut a = WebkitRng::new();
		let mut b = WebkitRng::new();
		a.set_seed(Some(0xdead_beef));
		b.set_seed(Some(0xdead_beef));
		for _ in 0..64 {
			assert_eq!(a.next_fraction(), b.next_fraction());
		}
	}

	#[test]
	fn entropy_seeding_differs_between_instances() {
		let mut a = WebkitRng::new();
		let mut b = WebkitRng::new();
		a.set_seed(None);
		b.set_seed(None);
		// 2^-32 collision odds; a failure here means the entropy path broke.
		assert_ne!((a.seed(), a.next_fraction()), (b.seed(), b.next_fraction()));
	}

	#[test]
	fn fractions_stay_in_unit_interval() {
		for seed in [0u32, 1, 5, 0xffff, 0x8000_0000, u32::MAX] {
			let mut rng = WebkitRng::new();
			rng.set_seed(Some(seed));
			for _ in 0..256 {
				let f = rng.next_fraction();
				assert!((0.0..1.0).contains(&f), "seed {seed} escaped range: {f}");
			}
		}
	}

	#[test]
	fn explicit_reseed_overwrites_state() {
		let mut rng = WebkitRng::new();
		rng.set_seed(Some(7));
		rng.next_fraction();
		rng.set_seed(Some(7));
		assert_eq!(rng.seed(), 7);
	}
}
