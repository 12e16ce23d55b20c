//! Hardware entropy source: CPU cycle counter mixed into a rotate/multiply state.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

// Odd 64-bit multipliers; every one is a bijection on the state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x8ebc_6af0_9c88_c6e3,
    0x5899_65cc_7537_4cc3,
];

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "/dev/urandom"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn entropy() -> u64 {
    OsRng.next_u64()
}

pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        // Seed from the OS so two generators started in the same tick diverge.
        Self {
            state: OsRng.next_u64() ^ entropy(),
        }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let ent = entropy();

        // Mix entropy into multiplier selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // State transition: rotate, multiply, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_outputs_differ() {
        let mut rng = HwRng::new();
        let draws: Vec<u64> = (0..64).map(|_| rng.next_u64()).collect();
        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 60);
    }

    #[test]
    fn fill_bytes_covers_odd_lengths() {
        let mut rng = HwRng::new();
        let mut buf = [0u8; 37];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
        // The partial trailing chunk is written too
        assert!(
            (0..16).any(|_| {
                let mut tail = [0u8; 3];
                rng.fill_bytes(&mut tail);
                tail != [0, 0, 0]
            })
        );
    }

    #[test]
    fn try_fill_bytes_succeeds() {
        let mut rng = HwRng::new();
        let mut buf = [0u8; 64];
        assert!(rng.try_fill_bytes(&mut buf).is_ok());
        assert!(buf.iter().any(|&b| b != 0));
    }
}
