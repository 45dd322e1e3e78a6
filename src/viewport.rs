use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
/// The rectangular region of the complex plane mapped onto the pixel grid
pub struct Viewport {
    /// The width of the pixel grid
    pub width: usize,
    /// The height of the pixel grid
    pub height: usize,
    /// The real coordinate of the left edge
    pub re_min: f64,
    /// The real coordinate of the right edge
    pub re_max: f64,
    /// The imaginary coordinate of the top row (y == 0)
    pub im_min: f64,
    /// The imaginary coordinate of the bottom edge
    pub im_max: f64,
}

impl Viewport {
    pub fn new(
        width: usize,
        height: usize,
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    ) -> Result<Viewport> {
        let vp = Viewport {
            width,
            height,
            re_min,
            re_max,
            im_min,
            im_max,
        };
        vp.validate()?;
        Ok(vp)
    }

    /// The full standard view: re in [-2.5, 1.0], im in [-1.0, 1.0].
    pub fn classic(width: usize, height: usize) -> Result<Viewport> {
        Viewport::new(width, height, -2.5, 1.0, -1.0, 1.0)
    }

    /// A view described by its center and the vertical extent of the plane
    /// region. The horizontal extent follows from the pixel aspect ratio.
    pub fn centered(
        cx: f64,
        cy: f64,
        im_span: f64,
        width: usize,
        height: usize,
    ) -> Result<Viewport> {
        if !(im_span > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "plane span must be positive, got {}",
                im_span
            )));
        }
        if height == 0 {
            return Err(Error::InvalidArgument("height must be at least 1".into()));
        }
        let re_span = im_span * width as f64 / height as f64;
        Viewport::new(
            width,
            height,
            cx - re_span / 2.0,
            cx + re_span / 2.0,
            cy - im_span / 2.0,
            cy + im_span / 2.0,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let max = i32::MAX as usize;
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > max || self.height > max {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must fit in i32, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.re_max > self.re_min) {
            return Err(Error::InvalidArgument(format!(
                "real bounds are degenerate: [{}, {}]",
                self.re_min, self.re_max
            )));
        }
        if !(self.im_max > self.im_min) {
            return Err(Error::InvalidArgument(format!(
                "imaginary bounds are degenerate: [{}, {}]",
                self.im_min, self.im_max
            )));
        }
        Ok(())
    }
}

/*
The transformation from pixel coordinates (x, y) to a plane sample (re, im)
needs four parameters: re0, im0, dre, dim, such that
re(x) = re0 + x * dre
im(y) = im0 + y * dim

The viewport bounds give
dre = (re_max - re_min) / width
dim = (im_max - im_min) / height
re0 = re_min
im0 = im_min

Samples sit on the top-left corner of each pixel, so x == 0 maps to re_min
exactly and x == width would map to re_max (one step past the last column).
The imaginary axis is not flipped: y grows downward and im(y) grows with it.
 */
pub struct PlaneMap {
    re0: f64,
    im0: f64,
    dre: f64,
    dim: f64,
}

impl PlaneMap {
    pub fn from_viewport(vp: &Viewport) -> PlaneMap {
        PlaneMap {
            re0: vp.re_min,
            im0: vp.im_min,
            dre: (vp.re_max - vp.re_min) / vp.width as f64,
            dim: (vp.im_max - vp.im_min) / vp.height as f64,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> (f64, f64) {
        (self.re(x), self.im(y))
    }
    pub fn re(&self, x: usize) -> f64 {
        self.re0 + x as f64 * self.dre
    }
    pub fn im(&self, y: usize) -> f64 {
        self.im0 + y as f64 * self.dim
    }
}
