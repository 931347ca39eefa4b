use rand::{Error, RngCore, SeedableRng};

use crate::twister::{Mt19937, Mt19937_64};

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    /// Low half first.
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.extract_number());
        let hi = u64::from(self.extract_number());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.extract_number().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: [u8; 4]) -> Mt19937 {
        Mt19937::new(u32::from_le_bytes(seed))
    }
}

impl RngCore for Mt19937_64 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.extract_number()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.extract_number().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937_64 {
    type Seed = [u8; 8];

    fn from_seed(seed: [u8; 8]) -> Mt19937_64 {
        Mt19937_64::new(u64::from_le_bytes(seed))
    }
}
