//! Selection of the number of entries to generate.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// The largest size [`select_size`] returns.
pub const MAX_SIZE: usize = i8::MAX as usize;

/// A source of random signed bytes.
#[auto_impl::auto_impl(&mut, Box)]
pub trait ByteRandomizer {
    fn next_byte(&mut self) -> i8;
}

/// [`ByteRandomizer`] backed by [`StdRng`].
#[derive(Clone, Debug)]
pub struct SeededByteRandomizer {
    rng: StdRng,
}

impl SeededByteRandomizer {
    /// Seeds deterministically from `seed`, or from the operating system if `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl ByteRandomizer for SeededByteRandomizer {
    fn next_byte(&mut self) -> i8 {
        self.rng.random()
    }
}

/// Draws a map size in `0..=MAX_SIZE`.
///
/// The size is the absolute value of a random byte, so every size but `0` is reachable from two
/// draws and `i8::MIN` saturates to [`MAX_SIZE`].
pub fn select_size<R: ByteRandomizer + ?Sized>(sizes: &mut R) -> usize {
    let byte = sizes.next_byte();
    let size = byte.saturating_abs().unsigned_abs() as usize;
    trace!(byte, size, "selected map size");
    size
}
