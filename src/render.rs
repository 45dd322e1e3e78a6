use crate::colorings::Coloring;
use crate::escape::IterationGrid;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Apply a coloring scheme to every cell of a grid. Pixel (x, y) of the
/// result corresponds to grid cell (x, y).
pub fn render(grid: &IterationGrid, coloring: &dyn Coloring) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    let max = grid.max_iterations();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let count = grid.get(x as usize, y as usize);
        *pixel = Rgb(coloring.color(count, max));
    }
    img
}

/// Render a grid and write it to disk. The format follows the file
/// extension; the benchmark images are PNGs.
pub fn save_image<P: AsRef<Path>>(
    grid: &IterationGrid,
    coloring: &dyn Coloring,
    path: P,
) -> image::ImageResult<()> {
    render(grid, coloring).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorings::{colorize, SmoothPolynomial};
    use crate::escape::evaluate;
    use crate::viewport::Viewport;

    #[test]
    fn image_has_grid_dimensions() {
        let vp = Viewport::classic(20, 12).unwrap();
        let grid = evaluate(&vp, 32).unwrap();
        let img = render(&grid, &SmoothPolynomial {});
        assert_eq!(img.dimensions(), (20, 12));
    }

    #[test]
    fn pixels_match_checked_colorize() {
        let vp = Viewport::classic(16, 8).unwrap();
        let grid = evaluate(&vp, 64).unwrap();
        let img = render(&grid, &SmoothPolynomial {});
        for (x, y, pixel) in img.enumerate_pixels() {
            let count = grid.get(x as usize, y as usize);
            assert_eq!(pixel.0, colorize(count, 64).unwrap());
        }
    }

    #[test]
    fn in_set_sample_renders_black() {
        // A 1x1 viewport whose corner sample is the origin.
        let vp = Viewport::new(1, 1, 0.0, 1.0, 0.0, 1.0).unwrap();
        let grid = evaluate(&vp, 25).unwrap();
        assert_eq!(grid.get(0, 0), 25);
        let img = render(&grid, &SmoothPolynomial {});
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
