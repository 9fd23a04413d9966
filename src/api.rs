use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::census::{self, ColorCensus, ColorComparison};
use crate::config::OverlayConfig;
use crate::errors::{KitError, KitResult};
use crate::overlay::{render_overlay, RegionSummary};
use crate::raster::Color;
use crate::region::{discover, ColorBand, DiscoveredRegion, RegionSegmenter, ScanGrid};
use crate::utils::image_utils::{load_rgb, save_rgb};
use crate::utils::logger::Logger;

/// Result of an overlay run
#[derive(Debug, Clone)]
pub struct OverlayOutcome {
    /// Where the composited map was written
    pub output: PathBuf,
    /// One entry per region, in compositing order
    pub regions: Vec<RegionSummary>,
}

/// Main interface to the regionkit library
pub struct RegionKit {
    logger: Logger,
}

impl RegionKit {
    /// Create a new RegionKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to the operation record; `None` keeps no record
    ///
    /// # Returns
    /// A RegionKit instance or an error if the record file cannot be created
    pub fn new(log_file: Option<&Path>) -> KitResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(RegionKit { logger })
    }

    /// The operation record
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Run the overlay job described by a TOML file
    ///
    /// # Arguments
    /// * `config_path` - Path to the job configuration
    /// * `output` - Optional output path overriding the one in the file
    pub fn overlay(&self, config_path: &Path, output: Option<&Path>) -> KitResult<OverlayOutcome> {
        let mut config = OverlayConfig::from_file(config_path)?;
        if let Some(path) = output {
            config.output = path.to_path_buf();
        }
        self.overlay_config(&config)
    }

    /// Run an already parsed overlay job
    ///
    /// Both rasters are decoded before any work starts and the output is
    /// only written once every region has been extracted and composited.
    pub fn overlay_config(&self, config: &OverlayConfig) -> KitResult<OverlayOutcome> {
        let source = load_rgb(&config.source)?;
        let mut target = load_rgb(&config.target)?;
        info!(
            "Overlaying {} regions from {} onto {}",
            config.regions.len(),
            config.source.display(),
            config.target.display()
        );

        let segmenter = RegionSegmenter::new(config.band);
        let regions = render_overlay(&source, &mut target, &config.regions, &config.transform, &segmenter)?;
        save_rgb(&target, &config.output)?;

        self.logger.log_region_summaries(&regions)?;
        self.logger.log(&format!("Overlay written to {}", config.output.display()))?;

        Ok(OverlayOutcome {
            output: config.output.clone(),
            regions,
        })
    }

    /// Find every district in an image
    ///
    /// # Arguments
    /// * `input_path` - Source raster
    /// * `grid` - Scan window, step and filters
    /// * `band` - Outline and background thresholds
    pub fn discover(&self, input_path: &Path, grid: &ScanGrid, band: ColorBand) -> KitResult<Vec<DiscoveredRegion>> {
        let image = load_rgb(input_path)?;
        let regions = discover(&image, &RegionSegmenter::new(band), grid);
        self.logger.log(&format!(
            "Discovered {} regions in {}",
            regions.len(),
            input_path.display()
        ))?;
        Ok(regions)
    }

    /// Count the map colors of an image
    pub fn census(&self, input_path: &Path) -> KitResult<ColorCensus> {
        let image = load_rgb(input_path)?;
        let census = ColorCensus::of(&image);
        self.logger.log(&format!(
            "Census of {}: {} colors",
            input_path.display(),
            census.len()
        ))?;
        Ok(census)
    }

    /// Compare the map colors of two versions of a map
    pub fn compare(&self, old_path: &Path, new_path: &Path) -> KitResult<ColorComparison> {
        let old = load_rgb(old_path)?;
        let new = load_rgb(new_path)?;
        let comparison = census::compare(&old, &new);
        self.logger.log(&format!(
            "Compared {} with {}: {} common, {} lost, {} new",
            old_path.display(),
            new_path.display(),
            comparison.common.len(),
            comparison.only_old.len(),
            comparison.only_new.len()
        ))?;
        Ok(comparison)
    }

    /// Replace the dominant gray of an image with `new_color`
    ///
    /// # Returns
    /// The gray that was replaced and the number of pixels changed, or an
    /// error when the image contains no gray at all
    pub fn recolor_dominant_gray(&self, input_path: &Path, output_path: &Path, new_color: Color) -> KitResult<(Color, usize)> {
        let mut image = load_rgb(input_path)?;
        let Some((gray, count)) = census::dominant_gray(&image) else {
            warn!("No gray colors found in {}", input_path.display());
            return Err(KitError::GenericError(format!(
                "No gray colors found in {}",
                input_path.display()
            )));
        };
        info!("Most common gray: {} ({} pixels)", gray, count);

        let replaced = census::recolor(&mut image, gray, new_color);
        save_rgb(&image, output_path)?;
        self.logger.log(&format!(
            "Recolored {} pixels of {} to {} in {}",
            replaced,
            gray,
            new_color,
            output_path.display()
        ))?;
        Ok((gray, replaced))
    }
}
