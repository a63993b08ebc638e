//! Command-line interface for batch conditioning of PNG files

use crate::analysis::EdgeStrategy;
use crate::filters::adjust::EdgeAdjustments;
use crate::filters::recolor::{RecolorMethod, parse_color};
use crate::filters::threshold::ThresholdMode;
use crate::filters::{FilterKind, Preprocessor};
use crate::io::configuration::{DEFAULT_SEED, OUTPUT_EXTENSION};
use crate::io::error::{PreprocessError, Result, io_error};
use crate::io::image::{load_raster, save_raster};
use crate::io::progress::ProgressManager;
use crate::render::annotation::annotate;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "condprep")]
#[command(
    author,
    version,
    about = "Turn photographs into structural conditioning maps"
)]
/// Command-line arguments for the conditioning tool
// Each filter exposes its own boolean switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Conditioning filter to apply
    #[arg(short, long, value_enum)]
    pub filter: FilterKind,

    /// Random seed for the tile shuffle
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Stamp the filter name and parameters onto the output
    #[arg(short, long)]
    pub annotate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log informational messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Canny: gradient magnitude below which pixels are dropped
    #[arg(long)]
    pub low_threshold: Option<f32>,

    /// Canny: gradient magnitude above which pixels are strong edges
    #[arg(long)]
    pub high_threshold: Option<f32>,

    /// Canny: use |gx| + |gy| instead of the Euclidean magnitude
    #[arg(long)]
    pub l1_gradient: bool,

    /// Canny: Gaussian pre-blur sigma, 0 disables
    #[arg(long)]
    pub gaussian_blur: Option<f32>,

    /// Canny: keep weak edges only when connected to a strong edge
    #[arg(long)]
    pub hysteresis: bool,

    /// MLSD: seed magnitude as a fraction of 255
    #[arg(long)]
    pub line_threshold: Option<f32>,

    /// MLSD: minimum traced steps for a segment to be kept
    #[arg(long)]
    pub length_threshold: Option<u32>,

    /// Strength of the effect (0-1) for filters that blend
    #[arg(short, long)]
    pub intensity: Option<f32>,

    /// Shuffle and tile resample: tile edge length in pixels
    #[arg(short, long)]
    pub tile_size: Option<u32>,

    /// Threshold and scribble: cut-off level (0-255)
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Threshold: pick the cut-off from the histogram with Otsu's method
    #[arg(long)]
    pub otsu: bool,

    /// Invert the output levels
    #[arg(long)]
    pub invert: bool,

    /// Sobel and Laplacian: response multiplier
    #[arg(long)]
    pub scale: Option<f32>,

    /// Sobel and Laplacian: response offset
    #[arg(long)]
    pub delta: Option<f32>,

    /// Depth and edge maps: contrast multiplier
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Depth and edge maps: brightness offset
    #[arg(long, allow_hyphen_values = true)]
    pub brightness: Option<f32>,

    /// Depth: stretch levels to the full range first
    #[arg(long)]
    pub normalize: bool,

    /// Depth: weight of the Canny edge cue (0-1)
    #[arg(long)]
    pub edge_weight: Option<f32>,

    /// Depth: spread around mid-gray (0.1-3)
    #[arg(long)]
    pub depth_strength: Option<f32>,

    /// Depth: Gaussian smoothing sigma (0-10)
    #[arg(long)]
    pub smoothing: Option<f32>,

    /// Lineart: background blur sigma
    #[arg(long)]
    pub sigma: Option<f32>,

    /// Normal: gradient multiplier
    #[arg(long)]
    pub strength: Option<f32>,

    /// Recolor: target colour as RRGGBB hex
    #[arg(long, value_parser = parse_color)]
    pub color: Option<[u8; 3]>,

    /// Recolor: gray level source
    #[arg(long, value_enum)]
    pub recolor_method: Option<RecolorMethod>,

    /// Edge maps: dilation width in pixels (1-5)
    #[arg(long)]
    pub edge_width: Option<u32>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// The selected filter with every given flag applied over its defaults
    ///
    /// Flags that do not belong to the selected filter are ignored.
    pub fn build_preprocessor(&self) -> Preprocessor {
        let mut preprocessor = Preprocessor::with_defaults(self.filter);
        match &mut preprocessor {
            Preprocessor::Canny(p) => {
                overwrite(&mut p.low_threshold, self.low_threshold);
                overwrite(&mut p.high_threshold, self.high_threshold);
                overwrite(&mut p.gaussian_blur, self.gaussian_blur);
                p.use_l2_gradient = !self.l1_gradient;
                if self.hysteresis {
                    p.strategy = EdgeStrategy::HysteresisLinked;
                }
            }
            Preprocessor::Mlsd(p) => {
                overwrite(&mut p.line_threshold, self.line_threshold);
                overwrite(&mut p.length_threshold, self.length_threshold);
                overwrite(&mut p.intensity, self.intensity);
            }
            Preprocessor::Shuffle(p) => {
                overwrite(&mut p.tile_size, self.tile_size);
                overwrite(&mut p.intensity, self.intensity);
            }
            Preprocessor::TileResample(p) => {
                overwrite(&mut p.tile_size, self.tile_size);
                overwrite(&mut p.intensity, self.intensity);
            }
            Preprocessor::Threshold(p) => {
                overwrite(&mut p.threshold, self.threshold);
                overwrite(&mut p.intensity, self.intensity);
                p.invert_colors = self.invert;
                if self.otsu {
                    p.mode = ThresholdMode::Otsu;
                }
            }
            Preprocessor::InpaintGuide(p) => overwrite(&mut p.intensity, self.intensity),
            Preprocessor::Sobel(p) | Preprocessor::Laplacian(p) => {
                overwrite(&mut p.scale, self.scale);
                overwrite(&mut p.delta, self.delta);
            }
            Preprocessor::Depth(p) => {
                overwrite(&mut p.contrast, self.contrast);
                overwrite(&mut p.brightness, self.brightness);
                overwrite(&mut p.edge_weight, self.edge_weight);
                overwrite(&mut p.depth_strength, self.depth_strength);
                overwrite(&mut p.smoothing, self.smoothing);
                p.normalize = self.normalize;
                p.invert = self.invert;
            }
            Preprocessor::Lineart(p) => overwrite(&mut p.sigma, self.sigma),
            Preprocessor::Scribble(p) => overwrite(&mut p.threshold, self.threshold),
            Preprocessor::Normal(p) => overwrite(&mut p.strength, self.strength),
            Preprocessor::Recolor(p) => {
                overwrite(&mut p.color, self.color);
                overwrite(&mut p.method, self.recolor_method);
            }
        }
        preprocessor
    }

    /// Post-pass settings for edge-style maps
    pub fn edge_adjustments(&self) -> EdgeAdjustments {
        let mut adjustments = EdgeAdjustments::default();
        overwrite(&mut adjustments.edge_width, self.edge_width);
        // Depth consumes these flags itself
        if self.filter != FilterKind::Depth {
            overwrite(&mut adjustments.contrast, self.contrast);
            overwrite(&mut adjustments.brightness, self.brightness);
        }
        // Threshold and depth invert inside the filter
        adjustments.invert = self.invert
            && !matches!(self.filter, FilterKind::Threshold | FilterKind::Depth);
        adjustments
    }
}

fn overwrite<T: Copy>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    preprocessor: Preprocessor,
    adjustments: EdgeAdjustments,
    rng: StdRng,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let preprocessor = cli.build_preprocessor();
        let adjustments = cli.edge_adjustments();
        let rng = StdRng::seed_from_u64(cli.seed);

        Self {
            cli,
            preprocessor,
            adjustments,
            rng,
            progress_manager,
        }
    }

    /// The filter every file is run through
    pub const fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_png(target) {
                return Err(io_error("Target file must be a PNG image"));
            }
            Ok(self
                .should_process_file(target)
                .then(|| target.clone())
                .into_iter()
                .collect())
        } else if target.is_dir() {
            let mut files = Vec::new();
            let read_error = |source| PreprocessError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            };
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_png(&path) && !self.is_own_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    // Outputs of an earlier run sit in the same directory
    fn is_own_output(&self, path: &Path) -> bool {
        let suffix = format!("_{}", self.preprocessor.name());
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(&suffix))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_raster(input_path)?;
        self.advance(index);

        let mut output =
            self.preprocessor
                .process_adjusted(&source, &self.adjustments, &mut self.rng)?;
        self.advance(index);

        if self.cli.annotate {
            output = annotate(
                &output,
                self.preprocessor.name(),
                &self.preprocessor.parameters(),
            )?;
        }
        self.advance(index);

        save_raster(&output, &output_path)?;
        info!(
            "Wrote {} ({}x{})",
            output_path.display(),
            output.width(),
            output.height()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn advance(&mut self, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance_stage(index);
        }
    }

    /// Where the output for `input_path` is written
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}_{}.{}",
            stem.to_string_lossy(),
            self.preprocessor.name(),
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION))
}
