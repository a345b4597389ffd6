//! PNG preview of a cliff route with start and destination markers

use crate::algorithm::search::PathStep;
use crate::io::configuration::{MAX_PREVIEW_EDGE_CELLS, PREVIEW_CELL_PIXELS};
use crate::io::error::{CliffError, Result};
use crate::spatial::point::CellPoint;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Raster class of an untouched cell
pub const EMPTY_CELL: u8 = 0;
/// Raster class of the start cell
pub const START_CELL: u8 = 1;
/// Raster class of the destination cell
pub const DESTINATION_CELL: u8 = 2;
/// Raster class of cells covered by even-numbered tiles of the route
pub const EVEN_TILE_CELL: u8 = 3;
/// Raster class of cells covered by odd-numbered tiles of the route
pub const ODD_TILE_CELL: u8 = 4;

// Indexed by raster class
const PALETTE: [[u8; 4]; 5] = [
    [0, 0, 0, 0],
    [46, 204, 64, 255],
    [255, 65, 54, 255],
    [133, 117, 96, 255],
    [94, 80, 63, 255],
];

#[derive(Debug)]
struct BoundingBox {
    min: CellPoint,
    max: CellPoint,
}

// Smallest rectangle containing every given cell
fn calculate_bounding_box(cells: impl IntoIterator<Item = CellPoint>) -> Option<BoundingBox> {
    cells.into_iter().fold(None, |bbox, cell| {
        Some(match bbox {
            None => BoundingBox {
                min: cell,
                max: cell,
            },
            Some(BoundingBox { min, max }) => BoundingBox {
                min: CellPoint::new(min.x.min(cell.x), min.y.min(cell.y)),
                max: CellPoint::new(max.x.max(cell.x), max.y.max(cell.y)),
            },
        })
    })
}

/// Cell classes of a route, cropped to its bounding box
#[derive(Debug, Clone)]
pub struct RouteRaster {
    /// Raster classes indexed by `[row, col]`
    pub cells: Array2<u8>,
    /// Map cell shown at row 0, column 0
    pub origin: CellPoint,
}

impl RouteRaster {
    /// Rasterize placed tiles plus start and destination markers
    ///
    /// Tiles alternate between two classes along the route; markers are drawn
    /// last and win over tile cells. Returns `None` when either edge of the
    /// bounding box exceeds [`MAX_PREVIEW_EDGE_CELLS`].
    pub fn from_route(
        path: &[PathStep<'_>],
        start: CellPoint,
        destination: CellPoint,
    ) -> Option<Self> {
        let tile_cells: Vec<(usize, CellPoint)> = path
            .iter()
            .enumerate()
            .flat_map(|(order, step)| step.tile.cells_at(step.location).map(move |c| (order, c)))
            .collect();

        let bbox = calculate_bounding_box(
            tile_cells
                .iter()
                .map(|&(_, cell)| cell)
                .chain([start, destination]),
        )
        .unwrap_or(BoundingBox {
            min: start,
            max: start,
        });

        let span = |min: i32, max: i32| {
            usize::try_from(i64::from(max) - i64::from(min) + 1)
                .ok()
                .filter(|&cells| cells <= MAX_PREVIEW_EDGE_CELLS)
        };
        let rows = span(bbox.min.y, bbox.max.y)?;
        let cols = span(bbox.min.x, bbox.max.x)?;
        let mut raster = Self {
            cells: Array2::zeros((rows, cols)),
            origin: bbox.min,
        };

        for (order, cell) in tile_cells {
            let class = if order % 2 == 0 {
                EVEN_TILE_CELL
            } else {
                ODD_TILE_CELL
            };
            raster.mark(cell, class);
        }
        raster.mark(start, START_CELL);
        raster.mark(destination, DESTINATION_CELL);

        Some(raster)
    }

    /// Class of a map cell, `None` outside the raster
    pub fn class_at(&self, cell: CellPoint) -> Option<u8> {
        let offset = cell.checked_sub(self.origin)?;
        let row = usize::try_from(offset.y).ok()?;
        let col = usize::try_from(offset.x).ok()?;
        self.cells.get([row, col]).copied()
    }

    fn mark(&mut self, cell: CellPoint, class: u8) {
        if let Some(offset) = cell.checked_sub(self.origin)
            && let (Ok(row), Ok(col)) = (usize::try_from(offset.y), usize::try_from(offset.x))
            && let Some(slot) = self.cells.get_mut([row, col])
        {
            *slot = class;
        }
    }
}

/// Export a route preview as a PNG image with transparent background
///
/// Returns `false` without writing anything when the route is too large to
/// preview.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_route_as_png(
    path: &[PathStep<'_>],
    start: CellPoint,
    destination: CellPoint,
    output_path: &Path,
) -> Result<bool> {
    let Some(raster) = RouteRaster::from_route(path, start, destination) else {
        return Ok(false);
    };
    let (rows, cols) = raster.cells.dim();

    let width = cols as u32 * PREVIEW_CELL_PIXELS;
    let height = rows as u32 * PREVIEW_CELL_PIXELS;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let class = raster
            .cells
            .get([
                (py / PREVIEW_CELL_PIXELS) as usize,
                (px / PREVIEW_CELL_PIXELS) as usize,
            ])
            .copied()
            .unwrap_or(EMPTY_CELL);
        Rgba(PALETTE.get(class as usize).copied().unwrap_or([0, 0, 0, 0]))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliffError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CliffError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(true)
}
