//! Compatibility layer with [RustCrypto](https://github.com/RustCrypto/hashes) hashers.

pub use digest::{Digest, FixedOutputReset, Output};

impl<D: Digest + FixedOutputReset + Default> crate::Hasher for D {
    type Hash = Output<D>;

    fn write(&mut self, bytes: &[u8]) {
        Digest::update(self, bytes);
    }

    fn finish(self) -> Self::Hash {
        Digest::finalize(self)
    }

    fn finish_reset(&mut self) -> Self::Hash {
        Digest::finalize_reset(self)
    }

    fn output_size() -> Option<usize> {
        Some(<D as Digest>::output_size())
    }
}
