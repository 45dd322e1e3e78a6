use crate::error::{Error, Result};
use crate::viewport::{PlaneMap, Viewport};
use scoped_threadpool::Pool;

// Return the number of iterations before we encounter the stop criterion
pub fn escape_time(cr: f64, ci: f64, max_iterations: u32) -> u32 {
    // The number of iterations
    let mut iteration = 0;
    // The initial values of the real and imaginary part of z
    let (mut zr, mut zi) = (0.0_f64, 0.0_f64);
    while iteration < max_iterations {
        let (zr2, zi2) = (zr * zr, zi * zi);
        // The stop criterion: |z|^2 > 4 means |z| > 2
        if zr2 + zi2 > 4.0 {
            break;
        }
        // Compute the new values for zr and zi
        zi = 2.0 * zr * zi + ci;
        zr = zr2 - zi2 + cr;
        iteration += 1;
    }
    iteration
}

/// Per-pixel escape iteration counts for one viewport, in row-major order
/// (`index = y * width + x`), together with the bound they were computed
/// against. Immutable once produced.
pub struct IterationGrid {
    width: usize,
    height: usize,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl IterationGrid {
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
    pub fn get(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.width && y < self.height);
        self.counts[y * self.width + x]
    }
    pub fn row(&self, y: usize) -> &[u32] {
        assert!(y < self.height);
        &self.counts[y * self.width..(y + 1) * self.width]
    }
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

// Fill a contiguous band of rows, starting at first_row.
fn fill_rows(band: &mut [u32], first_row: usize, width: usize, map: &PlaneMap, max: u32) {
    for (dy, line) in band.chunks_mut(width).enumerate() {
        let ci = map.im(first_row + dy);
        for (x, cell) in line.iter_mut().enumerate() {
            *cell = escape_time(map.re(x), ci, max);
        }
    }
}

fn check_request(viewport: &Viewport, max_iterations: u32) -> Result<()> {
    viewport.validate()?;
    if max_iterations == 0 {
        return Err(Error::InvalidArgument(
            "max_iterations must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Compute the iteration grid for a viewport, row by row.
///
/// Identical inputs always produce a bit-identical grid.
pub fn evaluate(viewport: &Viewport, max_iterations: u32) -> Result<IterationGrid> {
    check_request(viewport, max_iterations)?;
    let mut counts = vec![0u32; viewport.width * viewport.height];
    let map = PlaneMap::from_viewport(viewport);
    fill_rows(&mut counts, 0, viewport.width, &map, max_iterations);
    Ok(IterationGrid {
        width: viewport.width,
        height: viewport.height,
        max_iterations,
        counts,
    })
}

/// Same contract and same output as [`evaluate`], with the rows split into
/// contiguous bands executed on a scoped thread pool. Every pixel is
/// independent, so the bands share nothing and write disjoint ranges.
pub fn evaluate_parallel(
    viewport: &Viewport,
    max_iterations: u32,
    workers: usize,
) -> Result<IterationGrid> {
    check_request(viewport, max_iterations)?;
    let workers = workers.max(1);
    if workers == 1 {
        return evaluate(viewport, max_iterations);
    }
    let (width, height) = (viewport.width, viewport.height);
    let mut counts = vec![0u32; width * height];
    let map = PlaneMap::from_viewport(viewport);
    let rows_per_band = (height + workers - 1) / workers;
    let mut pool = Pool::new(workers as u32);
    pool.scoped(|scope| {
        for (i, band) in counts.chunks_mut(rows_per_band * width).enumerate() {
            let map = &map;
            scope.execute(move || fill_rows(band, i * rows_per_band, width, map, max_iterations));
        }
    });
    Ok(IterationGrid {
        width,
        height,
        max_iterations,
        counts,
    })
}
