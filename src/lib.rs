//! # timefreq - Bilinear time-frequency distributions for Rust
//!
//! Discrete Wigner-Ville and pseudo Wigner-Ville distributions of Cohen's
//! class, for localizing the instantaneous frequency of chirps, transients
//! and other non-stationary signals with better joint resolution than a
//! spectrogram.
//!
//! ## Features
//!
//! - **Wigner-Ville distribution** over arbitrary time instants and
//!   frequency-bin counts
//! - **Pseudo Wigner-Ville distribution** with a caller-supplied or default
//!   Hamming lag-smoothing window for cross-term suppression
//! - **Frequency-major output** (`tfr[freq_bin][time_idx]`) ready for
//!   plotting as a time-frequency image
//! - **Parallel column evaluation** with Rayon (optional)
//!
//! ## Cargo Features
//!
//! - `parallel`: fan time columns out across a Rayon thread pool
//!
//! ## Example
//!
//! ```
//! use timefreq::{wigner_ville, Complex64};
//! use core::f64::consts::PI;
//!
//! // 1/8 cycle per sample complex exponential.
//! let signal: Vec<Complex64> = (0..16)
//!     .map(|i| Complex64::from_polar(1.0, PI / 4.0 * i as f64))
//!     .collect();
//! let tfr = wigner_ville(&signal).unwrap();
//! assert_eq!(tfr.len(), 16); // frequency rows
//! assert_eq!(tfr[0].len(), 16); // time columns
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

pub mod wigner;
pub mod window;

pub use rustfft::num_complex::Complex64;
pub use wigner::{pseudo_wigner_ville, pseudo_wigner_ville_with, wigner_ville, wigner_ville_with};
pub use wigner::TfrError;
#[cfg(feature = "parallel")]
pub use wigner::{pseudo_wigner_ville_parallel, wigner_ville_parallel};
