//! Random number generator support

use super::Limb;
use rand_core::RngCore;

impl Limb {
    /// Generate a uniformly random [`Limb`] with its nail bits clear.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Limb::from_word_masked(rng.next_u32())
    }
}
