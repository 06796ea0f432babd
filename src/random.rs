use crate::config::RNG_SEED;
use crate::traits::RandomSource;

/// Xorshift LFSR, cheap enough to run on every apple draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { RNG_SEED } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(RNG_SEED)
    }
}

impl RandomSource for XorShift32 {
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32 + 1;
        low + (self.next_u32() % span) as i32
    }

    fn stir(&mut self, entropy: u32) {
        self.state ^= entropy;
        // Zero is a fixed point of xorshift
        if self.state == 0 {
            self.state = RNG_SEED;
        }
    }
}
