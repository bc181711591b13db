//! Snapshot export: rasterize the current map to a JPEG file.
//!
//! The raster is rebuilt from the grid model, not captured from the
//! screen, so the output is a pixel-exact rendition of the canvas
//! geometry regardless of window state.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, Rgb, RgbImage};

use crate::error::ExportError;
use crate::grid::GridModel;
use crate::layout::{self, CELL_SIZE};
use crate::palette;
use crate::util::time;

const JPEG_QUALITY: u8 = 90;
const DEFAULT_FILENAME_PREFIX: &str = "map_snapshot_";

/// Writes map snapshots into a fixed output directory.
pub struct SnapshotExporter {
    output_dir: PathBuf,
}

impl Default for SnapshotExporter {
    /// Write beside the application binary, falling back to the
    /// working directory when the executable path is unavailable.
    fn default() -> Self {
        let output_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { output_dir }
    }
}

impl SnapshotExporter {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the grid to a JPEG and return the written path.
    ///
    /// Both markers must be assigned; otherwise `MarkersMissing` is
    /// returned and no file is touched. `filename` defaults to
    /// `map_snapshot_<YYYYMMDD_HHMMSS>.jpg`.
    pub fn export(
        &self,
        grid: &GridModel,
        filename: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        if !grid.both_markers_assigned() {
            return Err(ExportError::MarkersMissing);
        }

        let image = render(grid);

        let name = match filename {
            Some(name) => name.to_owned(),
            None => format!("{DEFAULT_FILENAME_PREFIX}{}.jpg", time::filename_timestamp()),
        };
        let path = self.output_dir.join(name);

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
        encoder.encode(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )?;

        log::info!("snapshot saved to {}", path.display());
        Ok(path)
    }
}

/// Rasterize the bordered grid: margin first, then border slots, then
/// interior cells, each as a filled square with a 1-px outline.
fn render(grid: &GridModel) -> RgbImage {
    let (width, height) = layout::canvas_size(grid.cols(), grid.rows());
    let mut image = RgbImage::from_pixel(width, height, Rgb(palette::as_rgb(palette::MARGIN)));

    for slot in grid.slots() {
        draw_square(
            &mut image,
            slot.col,
            slot.row,
            palette::as_rgb(palette::slot_fill(slot.state)),
        );
    }
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            // interior coordinates are always valid here
            if let Some(state) = grid.cell(col, row) {
                draw_square(&mut image, col, row, palette::as_rgb(palette::cell_fill(state)));
            }
        }
    }

    image
}

fn draw_square(image: &mut RgbImage, col: i32, row: i32, fill: [u8; 3]) {
    let (x0, y0) = layout::element_origin(col, row);
    let outline = palette::as_rgb(palette::OUTLINE);
    for dy in 0..CELL_SIZE {
        for dx in 0..CELL_SIZE {
            let on_edge = dx == 0 || dy == 0 || dx == CELL_SIZE - 1 || dy == CELL_SIZE - 1;
            let color = if on_edge { outline } else { fill };
            let (x, y) = ((x0 + dx) as u32, (y0 + dy) as u32);
            if x < image.width() && y < image.height() {
                image.put_pixel(x, y, Rgb(color));
            }
        }
    }
}
