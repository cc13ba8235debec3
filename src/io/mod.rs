// Purpose - external interfaces, tabular data in and out

pub mod tremolo_csv;

use serde::{Deserialize, Serialize};

pub use tremolo_csv::{read_tremolo, read_tremolo_csv, write_tremolo, write_tremolo_csv};

/// One row of a tremolo capture: the ramp input, the modulated output and the
/// triangle LFO that drove it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TremoloRow {
    pub sample: u64,
    pub input: f32,
    pub output: f32,
    pub tri_wave: f32,
}
