//! The Mersenne Twister generators MT19937 and MT19937-64.
//!
//! Both are one algorithm over different constant sets, see [`Params`].
//! Output is bit-for-bit the reference `genrand_int32` / `genrand64_int64`
//! sequence. Not suitable for cryptography.
//!
//! ```
//! use mersenne_twister::Mt19937;
//!
//! let mut rand = Mt19937::from_key(&[0x123, 0x234, 0x345, 0x456]).unwrap();
//! assert_eq!(rand.extract_number(), 1067595299);
//! ```

mod error;
mod params;
mod rng;
mod twister;
mod word;

pub use crate::error::MtError;
pub use crate::params::{Params, Params32, Params64};
pub use crate::twister::{MersenneTwister, Mt19937, Mt19937_64};
pub use crate::word::Word;
