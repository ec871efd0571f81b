//! Track the instantaneous frequency of a linear chirp with the Wigner-Ville
//! and pseudo Wigner-Ville distributions.
//!
//! Run with:
//! ```bash
//! cargo run --example chirp
//! ```

use core::f64::consts::PI;

use timefreq::{pseudo_wigner_ville, wigner_ville, Complex64};

fn ridge(tfr: &[Vec<f64>], column: usize) -> usize {
    let mut best = 0;
    let mut peak = f64::NEG_INFINITY;
    for (row, values) in tfr.iter().enumerate() {
        if values[column] > peak {
            peak = values[column];
            best = row;
        }
    }
    best
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let n = 128;
    // Linear chirp sweeping from DC to half the band.
    let signal: Vec<Complex64> = (0..n)
        .map(|i| Complex64::from_polar(1.0, PI * (i * i) as f64 / (2 * n) as f64))
        .collect();

    let plain = wigner_ville(&signal)?;
    let smoothed = pseudo_wigner_ville(&signal)?;

    println!("time  wv ridge bin  pwv ridge bin");
    for ti in (8..n - 8).step_by(8) {
        println!(
            "{ti:>4}  {:>11}  {:>12}",
            ridge(&plain, ti),
            ridge(&smoothed, ti)
        );
    }
    Ok(())
}
