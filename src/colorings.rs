use crate::error::{Error, Result};
use dyn_clone::DynClone;

/// One pixel in RGB channel order.
pub type PixelColor = [u8; 3];

const BLACK: PixelColor = [0, 0, 0];

/// Map an escape count to a color, given the iteration bound the count was
/// produced with. Implementations are pure functions; counts equal to the
/// bound mark points inside the set and map to black.
pub trait Coloring: DynClone + Sync + Send {
    fn color(&self, iteration: u32, max_iterations: u32) -> PixelColor;
}

dyn_clone::clone_trait_object!(Coloring);

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn smooth_color(iteration: u32, max_iterations: u32) -> PixelColor {
    if max_iterations <= iteration {
        return BLACK;
    }
    let t = iteration as f64 / max_iterations as f64;
    let r = 255.0 * 9.0 * (1.0 - t) * t * t * t;
    let g = 255.0 * 15.0 * (1.0 - t) * (1.0 - t) * t * t;
    let b = 255.0 * 8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t;
    [channel(r), channel(g), channel(b)]
}

/// The smooth polynomial palette, checked against the count's domain.
///
/// Fails with [`Error::InvalidArgument`] if `max_iterations` is zero or
/// `iteration` lies outside `[0, max_iterations]`; a silently corrected
/// count would hide a caller bug behind a wrong color.
pub fn colorize(iteration: u32, max_iterations: u32) -> Result<PixelColor> {
    if max_iterations == 0 {
        return Err(Error::InvalidArgument(
            "max_iterations must be at least 1".into(),
        ));
    }
    if iteration > max_iterations {
        return Err(Error::InvalidArgument(format!(
            "iteration count {} exceeds the bound {}",
            iteration, max_iterations
        )));
    }
    Ok(smooth_color(iteration, max_iterations))
}

#[derive(Clone)]
/// The default palette: three low-order polynomials in t = iteration/max,
/// rising and falling at different rates so the bands blend smoothly.
pub struct SmoothPolynomial {}

impl Coloring for SmoothPolynomial {
    fn color(&self, iteration: u32, max_iterations: u32) -> PixelColor {
        smooth_color(iteration, max_iterations)
    }
}

#[derive(Clone)]
/// Modular hue gradient: the hue walks [0, 255] with the count and each
/// channel wraps at a different rate.
pub struct ModularRainbow {}

impl Coloring for ModularRainbow {
    fn color(&self, iteration: u32, max_iterations: u32) -> PixelColor {
        if max_iterations <= iteration {
            return BLACK;
        }
        let hue = 255 * iteration as u64 / max_iterations as u64;
        [
            ((hue * 9) % 256) as u8,
            ((hue * 7) % 256) as u8,
            ((hue * 5) % 256) as u8,
        ]
    }
}

#[derive(Clone)]
/// Log-scaled heat ramp, black through red and yellow to white. The log
/// spreads the low counts, which dominate any zoomed-out view.
pub struct LogHot {}

impl Coloring for LogHot {
    fn color(&self, iteration: u32, max_iterations: u32) -> PixelColor {
        if max_iterations <= iteration {
            return BLACK;
        }
        let t = (iteration as f64 + 1.0).ln() / (max_iterations as f64 + 1.0).ln();
        [
            channel(255.0 * (3.0 * t).min(1.0)),
            channel(255.0 * (3.0 * t - 1.0).clamp(0.0, 1.0)),
            channel(255.0 * (3.0 * t - 2.0).clamp(0.0, 1.0)),
        ]
    }
}

fn all_colorings() -> Vec<Box<dyn Coloring>> {
    vec![
        Box::new(SmoothPolynomial {}),
        Box::new(ModularRainbow {}),
        Box::new(LogHot {}),
    ]
}

pub struct ColorInfo {
    names: [&'static str; 3],
    producers: Vec<Box<dyn Coloring>>,
}

impl ColorInfo {
    pub fn new() -> ColorInfo {
        let names = ["smooth", "rainbow", "hot"];
        let producers = all_colorings();
        assert_eq!(names.len(), producers.len());
        ColorInfo { names, producers }
    }
    pub fn color_names(&self) -> &[&str] {
        self.names.as_slice()
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn producer(&self, i: usize) -> Box<dyn Coloring> {
        assert!(i < self.len());
        self.producers[i].clone()
    }
    pub fn by_name(&self, name: &str) -> Option<Box<dyn Coloring>> {
        let i = self.names.iter().position(|&n| n == name)?;
        Some(self.producers[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_count_is_black() {
        for max in [1, 10, 256, 10_000] {
            assert_eq!(colorize(max, max).unwrap(), BLACK);
        }
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        assert!(colorize(0, 0).is_err());
        assert!(colorize(5, 4).is_err());
        assert!(colorize(257, 256).is_err());
    }

    #[test]
    fn known_palette_values() {
        // t = 1/4: every factor is an exact dyadic, so the products are
        // exact and the rounding is stable.
        assert_eq!(colorize(64, 256).unwrap(), [27, 134, 229]);
        // t = 1/2
        assert_eq!(colorize(128, 256).unwrap(), [143, 239, 135]);
        // the smallest count the evaluator can record
        assert_eq!(colorize(1, 256).unwrap(), [0, 0, 8]);
    }

    #[test]
    fn zero_count_reproduces_the_polynomial_zero() {
        // Every channel polynomial carries a factor of t, so a zero count
        // colors the same in every call.
        assert_eq!(colorize(0, 64).unwrap(), colorize(0, 64).unwrap());
        assert_eq!(colorize(0, 64).unwrap(), BLACK);
    }

    #[test]
    fn polynomial_peaks_stay_below_saturation() {
        for max in [2, 7, 100, 256] {
            for v in 0..max {
                let [r, g, b] = colorize(v, max).unwrap();
                assert!(r < 243 && g < 240 && b < 230, "v={} max={}", v, max);
            }
        }
    }

    #[test]
    fn schemes_agree_on_in_set_points() {
        for producer in all_colorings() {
            assert_eq!(producer.color(100, 100), BLACK);
            assert_eq!(producer.color(200, 100), BLACK);
        }
    }

    #[test]
    fn registry_lookup() {
        let info = ColorInfo::new();
        assert_eq!(info.len(), 3);
        assert_eq!(info.color_names(), ["smooth", "rainbow", "hot"]);
        assert!(info.by_name("smooth").is_some());
        assert!(info.by_name("sepia").is_none());
        // index and name lookup hand out the same scheme
        let a = info.producer(1).color(10, 100);
        let b = info.by_name("rainbow").unwrap().color(10, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn smooth_scheme_matches_checked_colorize() {
        let scheme = SmoothPolynomial {};
        for v in [0, 1, 33, 128, 255, 256] {
            assert_eq!(scheme.color(v, 256), colorize(v, 256).unwrap());
        }
    }
}
