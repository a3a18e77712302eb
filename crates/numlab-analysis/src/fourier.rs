//! Discrete Fourier transform by direct summation.
//!
//! ```text
//! F[k] = Σₙ f[n] · exp(-2πi·kn/N)
//! f[n] = (1/N) Σₖ F[k] · exp(+2πi·kn/N)
//! ```
//!
//! Both directions are O(N²). The twiddle index `kn` is reduced modulo `N`
//! before it is turned into an angle, which keeps the angle in `[0, 2π)`
//! and the round trip accurate for longer signals.

use num_complex::Complex;
use numlab_core::{numerical::is_close, types::Scalar};
use tracing::trace;

fn transform<T: Scalar>(input: &[Complex<T>], sign: T) -> Vec<Complex<T>> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let step = sign * numlab_core::types::constants::tau::<T>() / <T as Scalar>::from_usize(n);
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Complex::new(T::zero(), T::zero()), |acc, (j, &value)| {
                    let index = (k * j) % n;
                    let twiddle = Complex::from_polar(T::one(), step * <T as Scalar>::from_usize(index));
                    acc + value * twiddle
                })
        })
        .collect()
}

/// Forward discrete Fourier transform.
pub fn dft<T: Scalar>(signal: &[Complex<T>]) -> Vec<Complex<T>> {
    trace!(len = signal.len(), "forward DFT");
    transform(signal, -T::one())
}

/// Inverse discrete Fourier transform (normalized by `1/N`).
pub fn idft<T: Scalar>(spectrum: &[Complex<T>]) -> Vec<Complex<T>> {
    trace!(len = spectrum.len(), "inverse DFT");
    let scale = if spectrum.is_empty() {
        T::one()
    } else {
        T::one() / <T as Scalar>::from_usize(spectrum.len())
    };
    transform(spectrum, T::one())
        .into_iter()
        .map(|value| value * scale)
        .collect()
}

/// Forward transform of a real-valued signal.
pub fn dft_real<T: Scalar>(signal: &[T]) -> Vec<Complex<T>> {
    let complex: Vec<Complex<T>> = signal.iter().map(|&x| Complex::new(x, T::zero())).collect();
    dft(&complex)
}

/// Whether `idft(dft(signal))` reproduces `signal` within `tol`.
///
/// Only the real parts of the recovered signal are compared; the imaginary
/// parts of a real signal's round trip are rounding noise.
pub fn verify_round_trip<T: Scalar>(signal: &[T], tol: T) -> bool {
    let recovered = idft(&dft_real(signal));
    signal
        .iter()
        .zip(recovered.iter())
        .all(|(&original, value)| is_close(original, value.re, T::zero(), tol))
}
