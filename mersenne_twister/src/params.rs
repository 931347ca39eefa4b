use crate::word::Word;

/// The constant set that picks out one member of the Mersenne Twister family.
pub trait Params {
    type Word: Word;
    /// Fixed-size backing array, always exactly `N` words long.
    type State: AsRef<[Self::Word]> + AsMut<[Self::Word]> + Copy;

    const NAME: &'static str;
    const EMPTY_STATE: Self::State;

    const N: usize;
    const M: usize;
    const MATRIX_A: Self::Word;
    const UPPER_MASK: Self::Word;
    const LOWER_MASK: Self::Word;

    /// Multiplier for scalar seeding.
    const F: Self::Word;
    /// Multipliers for the two mixing passes of key seeding.
    const KEY_MULT_A: Self::Word;
    const KEY_MULT_B: Self::Word;
    /// Scalar seed laid down before a key is mixed in.
    const KEY_BASE_SEED: Self::Word;
    const DEFAULT_SEED: Self::Word;

    // Tempering.
    const U: u32;
    const D: Self::Word;
    const S: u32;
    const B: Self::Word;
    const T: u32;
    const C: Self::Word;
    const L: u32;
}

/// MT19937.
#[derive(Debug)]
pub enum Params32 {}

impl Params for Params32 {
    type Word = u32;
    type State = [u32; 624];

    const NAME: &'static str = "Mt19937";
    const EMPTY_STATE: [u32; 624] = [0; 624];

    const N: usize = 624;
    const M: usize = 397;
    const MATRIX_A: u32 = 0x9908_B0DF;
    const UPPER_MASK: u32 = 0x8000_0000;
    const LOWER_MASK: u32 = 0x7FFF_FFFF;

    const F: u32 = 1_812_433_253;
    const KEY_MULT_A: u32 = 1_664_525;
    const KEY_MULT_B: u32 = 1_566_083_941;
    const KEY_BASE_SEED: u32 = 19_650_218;
    const DEFAULT_SEED: u32 = 5489;

    const U: u32 = 11;
    const D: u32 = 0xFFFF_FFFF;
    const S: u32 = 7;
    const B: u32 = 0x9D2C_5680;
    const T: u32 = 15;
    const C: u32 = 0xEFC6_0000;
    const L: u32 = 18;
}

/// MT19937-64.
#[derive(Debug)]
pub enum Params64 {}

impl Params for Params64 {
    type Word = u64;
    type State = [u64; 312];

    const NAME: &'static str = "Mt19937_64";
    const EMPTY_STATE: [u64; 312] = [0; 312];

    const N: usize = 312;
    const M: usize = 156;
    const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
    const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
    const LOWER_MASK: u64 = 0x7FFF_FFFF;

    const F: u64 = 6_364_136_223_846_793_005;
    const KEY_MULT_A: u64 = 3_935_559_000_370_003_845;
    const KEY_MULT_B: u64 = 2_862_933_555_777_941_757;
    const KEY_BASE_SEED: u64 = 19_650_218;
    const DEFAULT_SEED: u64 = 5489;

    const U: u32 = 29;
    const D: u64 = 0x5555_5555_5555_5555;
    const S: u32 = 17;
    const B: u64 = 0x71D6_7FFF_EDA6_0000;
    const T: u32 = 37;
    const C: u64 = 0xFFF7_EEE0_0000_0000;
    const L: u32 = 43;
}
