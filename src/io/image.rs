//! PNG previews of a level drawn from its vertex batch and the tile atlas

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{LevelError, Result, file_system, invalid_parameter};
use crate::spatial::grid::Grid;

/// Load the tile atlas as RGBA
///
/// # Errors
///
/// Returns [`LevelError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_atlas(path: &Path) -> Result<RgbaImage> {
    let atlas = image::open(path).map_err(|source| LevelError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(atlas.to_rgba8())
}

/// Rasterise the grid at world scale on a transparent background
///
/// Each quad copies its atlas cell; atlas pixels outside the image are left
/// transparent.
///
/// # Errors
///
/// Returns an error if the grid has no area
pub fn render_preview(grid: &mut Grid, atlas: &RgbaImage) -> Result<RgbaImage> {
    let [world_width, world_height] = grid.get_world_size();
    let width = world_width.ceil() as u32;
    let height = world_height.ceil() as u32;
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"an empty grid has nothing to render",
        ));
    }

    let tile = grid.tile_size().round() as u32;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for quad in grid.render_batch().quads() {
        let Some(corner) = quad.first() else {
            continue;
        };
        let [left, top] = corner.position.map(|v| v.round() as u32);
        let [tex_left, tex_top] = corner.tex_coords.map(|v| v.round() as u32);

        for dy in 0..tile {
            for dx in 0..tile {
                if let Some(&pixel) = atlas.get_pixel_checked(tex_left + dx, tex_top + dy)
                    && let Some(target) = img.get_pixel_mut_checked(left + dx, top + dy)
                {
                    *target = pixel;
                }
            }
        }
    }

    Ok(img)
}

/// Render the grid and save it as a PNG
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created or the image cannot be saved
pub fn export_preview_png(grid: &mut Grid, atlas: &RgbaImage, output_path: &Path) -> Result<()> {
    let img = render_preview(grid, atlas)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|source| LevelError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    log::info!("Preview written to {}", output_path.display());
    Ok(())
}
