pub mod analysis; // Harmonic profiles and tremolo statistics
pub mod dsp;
mod error;
pub mod io;
pub mod plot; // PNG charts

pub use error::{Error, Result};
