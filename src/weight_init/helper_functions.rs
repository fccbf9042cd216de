use rand::SeedableRng;
use rand::rngs::StdRng;

/// Calculates the fan-in and fan-out of a parameter shape.
///
/// - `[]` and `[n]` - `(n, n)`, with `n = 1` for scalars
/// - `[in, out]` - `(in, out)`, the dense layer convention
/// - `[out, in, k...]` - `(in * receptive, out * receptive)` where `receptive` is the
///   product of the kernel dimensions, the convolution convention
///
/// # Parameters
///
/// * `shape` - Declared parameter shape
///
/// # Returns
///
/// * `(usize, usize)` - The `(fan_in, fan_out)` pair
pub fn fan_in_fan_out(shape: &[usize]) -> (usize, usize) {
    match shape {
        [] => (1, 1),
        [n] => (*n, *n),
        [fan_in, fan_out] => (*fan_in, *fan_out),
        [out_channels, in_channels, kernel @ ..] => {
            let receptive: usize = kernel.iter().product();
            (in_channels * receptive, out_channels * receptive)
        }
    }
}

/// Creates the random number generator used by a weight initializer.
///
/// # Parameters
///
/// * `seed` - Fixed seed for reproducible initialization, or `None` to seed from the thread RNG
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    }
}
