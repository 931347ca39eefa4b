use std::cmp;
use std::fmt;

use crate::error::MtError;
use crate::params::{Params, Params32, Params64};
use crate::word::Word;

pub type Mt19937 = MersenneTwister<Params32>;
pub type Mt19937_64 = MersenneTwister<Params64>;

/// A Mersenne Twister generator.
///
/// There is no unseeded generator: every constructor runs one of the two
/// seeding algorithms, so `extract_number` always has a full state to draw on.
pub struct MersenneTwister<P: Params> {
    mt: P::State,
    // Next word of the current batch to emit. `N` means the batch is used up.
    index: usize,
}

impl<P: Params> MersenneTwister<P> {
    /// Seeds from a single word.
    pub fn new(seed: P::Word) -> Self {
        let mut twister = MersenneTwister {
            mt: P::EMPTY_STATE,
            index: P::N,
        };
        twister.seed(seed);
        twister
    }

    /// Seeds from a key of one or more words.
    pub fn from_key(key: &[P::Word]) -> Result<Self, MtError> {
        let mut twister = MersenneTwister {
            mt: P::EMPTY_STATE,
            index: P::N,
        };
        twister.seed_key(key)?;
        Ok(twister)
    }

    /// Rebuilds a generator from a snapshot taken with [`state`](Self::state).
    pub fn from_state(words: &[P::Word], index: usize) -> Result<Self, MtError> {
        if words.len() != P::N {
            return Err(MtError::InvalidState("state must hold exactly N words"));
        }
        if index > P::N {
            return Err(MtError::InvalidState("index past the end of the state"));
        }
        let mut mt = P::EMPTY_STATE;
        mt.as_mut().copy_from_slice(words);
        Ok(MersenneTwister { mt, index })
    }

    pub fn seed(&mut self, seed: P::Word) {
        let mt = self.mt.as_mut();
        mt[0] = seed;
        for i in 1..P::N {
            let prev = mt[i - 1];
            mt[i] = P::F
                .wrapping_mul(prev ^ (prev >> (P::Word::BITS - 2)))
                .wrapping_add(P::Word::from_usize(i));
        }
        self.index = P::N;
    }

    /// Reseeds from `key`. An empty key is rejected before the state is
    /// touched.
    pub fn seed_key(&mut self, key: &[P::Word]) -> Result<(), MtError> {
        if key.is_empty() {
            return Err(MtError::InvalidInput("seed key must not be empty"));
        }
        self.seed(P::KEY_BASE_SEED);

        let n = P::N;
        let shift = P::Word::BITS - 2;
        let mt = self.mt.as_mut();
        let mut i = 1;
        let mut j = 0;
        for _ in 0..cmp::max(n, key.len()) {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> shift)).wrapping_mul(P::KEY_MULT_A))
                .wrapping_add(key[j])
                .wrapping_add(P::Word::from_usize(j));
            i += 1;
            j += 1;
            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 1..n {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> shift)).wrapping_mul(P::KEY_MULT_B))
                .wrapping_sub(P::Word::from_usize(i));
            i += 1;
            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
        }
        // Guarantees a non-zero state.
        mt[0] = P::Word::MSB;
        self.index = n;
        Ok(())
    }

    /// Regenerates the whole batch in place.
    fn twist(&mut self) {
        let n = P::N;
        let mt = self.mt.as_mut();
        for i in 0..n {
            let x = (mt[i] & P::UPPER_MASK) | (mt[(i + 1) % n] & P::LOWER_MASK);
            let mut xa = x >> 1;
            if x.is_odd() {
                xa = xa ^ P::MATRIX_A;
            }
            mt[i] = mt[(i + P::M) % n] ^ xa;
        }
        self.index = 0;
    }

    pub fn extract_number(&mut self) -> P::Word {
        if self.index >= P::N {
            self.twist();
        }

        let mut y = self.mt.as_ref()[self.index];
        y = y ^ ((y >> P::U) & P::D);
        y = y ^ ((y << P::S) & P::B);
        y = y ^ ((y << P::T) & P::C);
        y = y ^ (y >> P::L);

        self.index += 1;
        y
    }

    /// Skips `count` outputs. Tempering never touches the state, so whole
    /// batches are jumped with a bare twist.
    pub fn discard(&mut self, mut count: u64) {
        while count > 0 {
            if self.index >= P::N {
                self.twist();
            }
            let step = cmp::min((P::N - self.index) as u64, count);
            self.index += step as usize;
            count -= step;
        }
    }

    /// The raw state words and the index of the next word to emit.
    pub fn state(&self) -> (&[P::Word], usize) {
        (self.mt.as_ref(), self.index)
    }
}

impl<P: Params> Default for MersenneTwister<P> {
    fn default() -> Self {
        MersenneTwister::new(P::DEFAULT_SEED)
    }
}

impl<P: Params> Clone for MersenneTwister<P> {
    fn clone(&self) -> Self {
        MersenneTwister {
            mt: self.mt,
            index: self.index,
        }
    }
}

impl<P: Params> PartialEq for MersenneTwister<P> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.mt.as_ref() == other.mt.as_ref()
    }
}

impl<P: Params> Eq for MersenneTwister<P> {}

impl<P: Params> fmt::Debug for MersenneTwister<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(P::NAME)
            .field("index", &self.index)
            .finish()
    }
}

/// Never runs dry.
impl<P: Params> Iterator for MersenneTwister<P> {
    type Item = P::Word;

    fn next(&mut self) -> Option<P::Word> {
        Some(self.extract_number())
    }
}
