use crate::domain::article::SuffixSource;
use rand::Rng;

/// Draws slug suffixes from the thread-local generator.
#[derive(Default, Clone)]
pub struct ThreadRngSuffix;

impl SuffixSource for ThreadRngSuffix {
    fn next_suffix(&self) -> u32 {
        rand::thread_rng().gen_range(2..255)
    }
}
