//! Subcommand arguments and runners.

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use stair_dsp::{
    analysis::{shaped_sine_profile, TremoloReport},
    dsp::{
        distortion::{DEFAULT_CEILING, DEFAULT_STEP, DEFAULT_STEPS},
        tremolo::{generate as generate_tremolo, TremoloSettings},
        Staircase, ThresholdTable,
    },
    io::{read_tremolo_csv, write_tremolo_csv},
    plot::{render_distortion_charts, TremoloPlot},
};

use crate::ui::PreviewApp;

/// Harmonics listed after rendering the distortion charts.
const REPORTED_HARMONICS: usize = 9;

/// Threshold table shape shared by the shaper commands
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Largest threshold (the clamp level)
    #[arg(long, default_value_t = DEFAULT_CEILING)]
    ceiling: f32,

    /// Spacing between thresholds
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f32,

    /// Number of thresholds
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,
}

impl TableArgs {
    fn shaper(&self) -> EyreResult<Staircase> {
        let table = ThresholdTable::linear(self.ceiling, self.step, self.steps)
            .wrap_err("threshold flags describe an invalid table")?;
        Ok(Staircase::new(table))
    }
}

#[derive(Args, Debug)]
pub struct DistortionArgs {
    /// Directory for the rendered PNG files
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Points sampled across the transfer curve
    #[arg(long, default_value_t = 2000)]
    points: usize,

    #[command(flatten)]
    table: TableArgs,
}

#[derive(Args, Debug)]
pub struct TremoloArgs {
    /// Tremolo capture with sample,input,output,tri_wave columns
    #[arg(long, default_value = "tremolo_output.csv")]
    csv: PathBuf,

    /// Output chart
    #[arg(long, default_value = "tremolo_analysis.png")]
    out: PathBuf,

    /// Rows shown in the zoomed panel
    #[arg(long, default_value_t = 10_000)]
    zoom: usize,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Destination CSV
    #[arg(long, default_value = "tremolo_output.csv")]
    out: PathBuf,

    /// Number of rows
    #[arg(long, default_value_t = 96_000)]
    length: usize,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48_000.0)]
    sample_rate: f32,

    /// Ramp carrier frequency in Hz
    #[arg(long, default_value_t = 220.0)]
    carrier_hz: f32,

    /// Triangle LFO frequency in Hz
    #[arg(long, default_value_t = 5.0)]
    lfo_hz: f32,

    /// Modulation depth (0-1)
    #[arg(long, default_value_t = 0.5)]
    depth: f32,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    table: TableArgs,
}

pub fn distortion(args: DistortionArgs) -> EyreResult<()> {
    let shaper = args.table.shaper()?;

    let saved = render_distortion_charts(&shaper, &args.out_dir, args.points)
        .wrap_err_with(|| format!("failed to render charts into {}", args.out_dir.display()))?;
    for path in &saved {
        println!("saved: {}", path.display());
    }

    let profile = shaped_sine_profile(&shaper, REPORTED_HARMONICS);
    println!();
    println!("=== Harmonic Profile (full-scale sine) ===");
    for (i, level) in profile.levels_db.iter().enumerate() {
        println!("  H{:<2} {:>8.1} dB", i + 1, level);
    }
    println!("THD: {:.2}%", profile.thd_percent);

    Ok(())
}

pub fn tremolo(args: TremoloArgs) -> EyreResult<()> {
    let rows = read_tremolo_csv(&args.csv)
        .wrap_err_with(|| format!("failed to load {}", args.csv.display()))?;

    TremoloPlot::new()
        .zoom_span(args.zoom)
        .render(&rows, &args.out)
        .wrap_err_with(|| format!("failed to render {}", args.out.display()))?;
    println!("Plot saved as '{}'", args.out.display());

    println!();
    println!("{}", TremoloReport::from_rows(&rows));
    Ok(())
}

pub fn generate(args: GenerateArgs) -> EyreResult<()> {
    let settings = TremoloSettings::new()
        .length(args.length)
        .sample_rate(args.sample_rate)
        .carrier_hz(args.carrier_hz)
        .lfo_hz(args.lfo_hz)
        .depth(args.depth);

    let rows = generate_tremolo(&settings);
    write_tremolo_csv(&args.out, &rows)
        .wrap_err_with(|| format!("failed to write {}", args.out.display()))?;
    println!("wrote {} rows to {}", rows.len(), args.out.display());
    Ok(())
}

pub fn preview(args: PreviewArgs) -> EyreResult<()> {
    let shaper = args.table.shaper()?;
    let mut app = PreviewApp::new(shaper);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
