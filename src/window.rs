//! Smoothing windows for the pseudo Wigner-Ville distribution.

use core::f64::consts::PI;

/// Symmetric Hamming window of length `len`.
///
/// Lengths 0 and 1 return a single unit weight.
pub fn hamming(len: usize) -> Vec<f64> {
    cosine_tapered(len, 0.54, 0.46)
}

/// Symmetric Hann window of length `len`.
///
/// Endpoint weights are exactly zero; lengths 0 and 1 return a single unit
/// weight.
pub fn hann(len: usize) -> Vec<f64> {
    cosine_tapered(len, 0.5, 0.5)
}

fn cosine_tapered(len: usize, a: f64, b: f64) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0];
    }
    let denom = (len - 1) as f64;
    (0..len)
        .map(|i| a - b * (2.0 * PI * i as f64 / denom).cos())
        .collect()
}

/// Default lag-smoothing window for a signal of `signal_len` samples: a
/// Hamming window of a quarter of the signal length, forced odd upward so it
/// can be centered on a single lag.
pub fn smoothing_window(signal_len: usize) -> Vec<f64> {
    let mut len = signal_len / 4;
    if len % 2 == 0 {
        len += 1;
    }
    hamming(len)
}
