//! Wigner-Ville and pseudo Wigner-Ville time-frequency distributions.
//!
//! Both distributions share one core: for every requested time instant the
//! signal is multiplied with its own conjugate at symmetric lags, the products
//! are deposited into a frequency-wrapped lag column, and a forward FFT turns
//! the column of lag correlations into a column of frequency energies. The
//! conjugate symmetry of the assembly makes the transform output real up to
//! floating-point rounding, so only the real part is returned.

use core::fmt;

use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

use crate::window::smoothing_window;

/// Errors that can occur while computing a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TfrError {
    /// The input signal was empty.
    EmptyInput,
    /// The requested number of frequency bins was zero.
    InvalidFreqBins,
    /// A requested time instant does not index into the signal.
    TimeIndexOutOfRange,
    /// The smoothing window must have an odd length so it can be centered on
    /// a single sample.
    EvenWindowLength,
}

impl fmt::Display for TfrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfrError::EmptyInput => write!(f, "input signal is empty"),
            TfrError::InvalidFreqBins => write!(f, "frequency bin count must be at least 1"),
            TfrError::TimeIndexOutOfRange => {
                write!(f, "time instant does not index into the signal")
            }
            TfrError::EvenWindowLength => {
                write!(f, "smoothing window must have an odd length")
            }
        }
    }
}

impl std::error::Error for TfrError {}

/// Compute the Wigner-Ville distribution with default parameters.
///
/// Evaluates every time instant of `signal` with as many frequency bins as
/// signal samples. Equivalent to
/// [`wigner_ville_with`]`(signal, &(0..signal.len()), signal.len())`.
///
/// Returns a frequency-major matrix `tfr[freq_bin][time_idx]` of shape
/// `signal.len() x signal.len()`.
pub fn wigner_ville(signal: &[Complex64]) -> Result<Vec<Vec<f64>>, TfrError> {
    let time_samples: Vec<usize> = (0..signal.len()).collect();
    wigner_ville_with(signal, &time_samples, signal.len())
}

/// Compute the Wigner-Ville distribution of a complex signal.
///
/// - `signal`: input samples (real signals are the `im == 0` special case)
/// - `time_samples`: time instants at which the distribution is evaluated;
///   every entry must index into `signal`
/// - `freq_bins`: number of frequency bins per column; a warning is logged
///   when it is not a power of two because the column transforms are slower
///
/// Returns a frequency-major matrix `tfr[freq_bin][time_idx]` of shape
/// `freq_bins x time_samples.len()`, or a [`TfrError`] on invalid input.
pub fn wigner_ville_with(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
) -> Result<Vec<Vec<f64>>, TfrError> {
    distribution(signal, time_samples, freq_bins, None)
}

/// Compute the pseudo Wigner-Ville distribution with default parameters.
///
/// Uses a Hamming smoothing window of length `signal.len() / 4` forced odd
/// upward, all time instants, and `signal.len()` frequency bins.
pub fn pseudo_wigner_ville(signal: &[Complex64]) -> Result<Vec<Vec<f64>>, TfrError> {
    let time_samples: Vec<usize> = (0..signal.len()).collect();
    let window = smoothing_window(signal.len());
    pseudo_wigner_ville_with(signal, &time_samples, signal.len(), &window)
}

/// Compute the pseudo Wigner-Ville distribution of a complex signal.
///
/// The lag products are weighted by `window` before the frequency transform,
/// trading frequency resolution for suppression of interference cross terms.
/// As the window widens towards unit weights over every admissible lag the
/// result degenerates to the plain Wigner-Ville distribution.
///
/// - `signal`, `time_samples`, `freq_bins`: as in [`wigner_ville_with`]
/// - `window`: real non-negative weights of odd length, symmetric about the
///   center sample; an even length is rejected with
///   [`TfrError::EvenWindowLength`] before any computation
///
/// The windowed bilinear product is centered one sample earlier than the
/// unwindowed one, following the centering convention of the default window
/// generator; column `t` of the smoothed output therefore lines up with
/// column `t - 1` of [`wigner_ville_with`] when the window degenerates to
/// unit weights.
///
/// Returns a frequency-major matrix `tfr[freq_bin][time_idx]` of shape
/// `freq_bins x time_samples.len()`.
pub fn pseudo_wigner_ville_with(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
    window: &[f64],
) -> Result<Vec<Vec<f64>>, TfrError> {
    distribution(signal, time_samples, freq_bins, Some(window))
}

/// Parallel [`wigner_ville_with`] using Rayon.
///
/// Requires the `parallel` feature. Time columns are independent, so they are
/// fanned out across the thread pool; the result is identical to the serial
/// version.
#[cfg(feature = "parallel")]
pub fn wigner_ville_parallel(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
) -> Result<Vec<Vec<f64>>, TfrError> {
    distribution_parallel(signal, time_samples, freq_bins, None)
}

/// Parallel [`pseudo_wigner_ville_with`] using Rayon.
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn pseudo_wigner_ville_parallel(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
    window: &[f64],
) -> Result<Vec<Vec<f64>>, TfrError> {
    distribution_parallel(signal, time_samples, freq_bins, Some(window))
}

fn validate(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
    window: Option<&[f64]>,
) -> Result<(), TfrError> {
    if signal.is_empty() {
        return Err(TfrError::EmptyInput);
    }
    if freq_bins == 0 {
        return Err(TfrError::InvalidFreqBins);
    }
    if let Some(window) = window {
        if window.len() % 2 == 0 {
            return Err(TfrError::EvenWindowLength);
        }
    }
    if time_samples.iter().any(|&ti| ti >= signal.len()) {
        return Err(TfrError::TimeIndexOutOfRange);
    }
    advise_power_of_two(freq_bins);
    Ok(())
}

/// Log the performance advisory for awkward transform sizes. Returns whether
/// an advisory was emitted; the computation proceeds either way.
fn advise_power_of_two(freq_bins: usize) -> bool {
    if freq_bins.is_power_of_two() {
        return false;
    }
    log::warn!("freq_bins = {freq_bins} is not a power of two; the column transforms will be slower");
    true
}

/// `round(freq_bins / 2)`; for even bin counts, the lag index of the
/// self-conjugate Nyquist row.
fn half_bins(freq_bins: usize) -> isize {
    (freq_bins as f64 / 2.0).round() as isize
}

/// Signal access for the windowed product, whose one-sample centering offset
/// can reach index -1 at the left signal edge; wraps circularly.
fn wrapped(signal: &[Complex64], idx: isize) -> Complex64 {
    let n = signal.len() as isize;
    signal[idx.rem_euclid(n) as usize]
}

/// Assemble one lag-correlation column for time index `ti` into `col`.
///
/// Lags run over `[-taumax, taumax]` where `taumax` is clipped by the signal
/// boundaries, by half the frequency-bin count, and by the window half-length
/// when smoothing. Lag `tau` lands on row `(F + tau) mod F`, so negative lags
/// occupy the back half of the frequency axis in standard FFT ordering. For
/// even bin counts the Nyquist row has no symmetric partner and is overwritten
/// with the halved average of both cross terms whenever the boundaries admit
/// it; for odd counts every row is paired and no special case applies.
fn fill_column(signal: &[Complex64], ti: usize, window: Option<&[f64]>, col: &mut [Complex64]) {
    let n = signal.len() as isize;
    let f = col.len() as isize;
    let ti = ti as isize;
    let tau_nyq = half_bins(col.len());

    let mut taumax = ti.min(n - 1 - ti).min(tau_nyq - 1);
    if let Some(window) = window {
        taumax = taumax.min(((window.len() - 1) / 2) as isize);
    }
    if taumax < 0 {
        // Degenerate column; near-boundary attenuation, not an error.
        return;
    }

    match window {
        None => {
            for tau in -taumax..=taumax {
                let row = (f + tau).rem_euclid(f) as usize;
                let fwd = signal[(ti + tau) as usize];
                let rev = signal[(ti - tau) as usize];
                col[row] = fwd * rev.conj();
            }
            if 2 * tau_nyq == f && ti >= tau_nyq && ti + tau_nyq <= n - 1 {
                let fwd = signal[(ti + tau_nyq) as usize];
                let rev = signal[(ti - tau_nyq) as usize];
                col[tau_nyq as usize] = 0.5 * (fwd * rev.conj() + rev * fwd.conj());
            }
        }
        Some(window) => {
            let lh = ((window.len() - 1) / 2) as isize;
            for tau in -taumax..=taumax {
                let row = (f + tau).rem_euclid(f) as usize;
                let fwd = wrapped(signal, ti + tau - 1);
                let rev = wrapped(signal, ti - tau - 1);
                col[row] = window[(lh + tau) as usize] * fwd * rev.conj();
            }
            if 2 * tau_nyq == f && tau_nyq <= lh && ti >= tau_nyq + 1 && ti + tau_nyq <= n {
                let fwd = signal[(ti + tau_nyq - 1) as usize];
                let rev = signal[(ti - tau_nyq - 1) as usize];
                col[tau_nyq as usize] = 0.5
                    * (window[(lh + tau_nyq) as usize] * fwd * rev.conj()
                        + window[(lh - tau_nyq) as usize] * rev * fwd.conj());
            }
        }
    }
}

fn distribution(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
    window: Option<&[f64]>,
) -> Result<Vec<Vec<f64>>, TfrError> {
    validate(signal, time_samples, freq_bins, window)?;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(freq_bins);

    let mut tfr = vec![vec![0.0; time_samples.len()]; freq_bins];
    let mut col = vec![Complex64::new(0.0, 0.0); freq_bins];
    for (icol, &ti) in time_samples.iter().enumerate() {
        col.iter_mut().for_each(|c| *c = Complex64::new(0.0, 0.0));
        fill_column(signal, ti, window, &mut col);
        fft.process(&mut col);
        for (row, value) in col.iter().enumerate() {
            tfr[row][icol] = value.re;
        }
    }
    Ok(tfr)
}

#[cfg(feature = "parallel")]
fn distribution_parallel(
    signal: &[Complex64],
    time_samples: &[usize],
    freq_bins: usize,
    window: Option<&[f64]>,
) -> Result<Vec<Vec<f64>>, TfrError> {
    use rayon::prelude::*;

    validate(signal, time_samples, freq_bins, window)?;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(freq_bins);

    let columns: Vec<Vec<f64>> = time_samples
        .par_iter()
        .map(|&ti| {
            let mut col = vec![Complex64::new(0.0, 0.0); freq_bins];
            fill_column(signal, ti, window, &mut col);
            fft.process(&mut col);
            col.iter().map(|value| value.re).collect()
        })
        .collect();

    let mut tfr = vec![vec![0.0; time_samples.len()]; freq_bins];
    for (icol, column) in columns.iter().enumerate() {
        for (row, value) in column.iter().enumerate() {
            tfr[row][icol] = *value;
        }
    }
    Ok(tfr)
}
