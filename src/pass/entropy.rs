//! Entropy estimate.

/// Bits of entropy of a password of `length` characters drawn uniformly
/// from an alphabet of `alphabet_size` symbols: `floor(log2(size^length))`.
///
/// Computed as `length * log2(size)` in `f64`; `size^length` itself would
/// overflow any fixed-width integer for realistic inputs. Alphabets of zero
/// or one symbol carry no entropy.
pub fn get_entropy(alphabet_size: usize, length: usize) -> u32 {
    if alphabet_size < 2 {
        return 0;
    }
    let bits = length as f64 * (alphabet_size as f64).log2();
    // Exact powers of two must not land a hair under the integer.
    (bits + 1e-9).floor() as u32
}
