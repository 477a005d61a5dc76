//! Deterministic hashing and pseudo-randomness.
//!
//! Both primitives are hand-rolled so their output is fixed by this file
//! alone: the same word must produce the same board in every process,
//! on every platform, under every future dependency upgrade.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Substituted for a zero seed, which would pin `xorshift64` at zero forever.
const ZERO_SEED_FALLBACK: u64 = 0xdead_beef_cafe_babe;

/// 64-bit FNV-1a over a byte sequence. Order sensitive.
pub fn fnv1a64<I>(bytes: I) -> u64
where
    I: IntoIterator<Item = u8>,
{
    bytes.into_iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// `xorshift64` pseudo-random sequence.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Start a sequence from `seed`.
    pub const fn new(seed: u64) -> Self {
        // Spread low-entropy seeds before the first shift round.
        let mut state = seed.wrapping_mul(0x517c_c1b7_2722_0a95);
        if state == 0 {
            state = ZERO_SEED_FALLBACK;
        }
        Self { state }
    }

    /// Advance and return the next value.
    pub const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// A value in `0..bound`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        let Ok(bound_u64) = u64::try_from(bound) else {
            return 0;
        };
        let value = self.next_u64().checked_rem(bound_u64).unwrap_or(0);
        usize::try_from(value).unwrap_or(0)
    }
}
