use crate::error::Result;
use crate::viewport::Viewport;

/// A named region of the plane worth rendering, with the iteration depth
/// that resolves it.
pub struct Preset {
    name: &'static str,
    cx: f64,
    cy: f64,
    im_span: f64,
    iter_depth: u32,
}

impl Preset {
    fn new(name: &'static str, cx: f64, cy: f64, im_span: f64, iter_depth: u32) -> Preset {
        Preset {
            name,
            cx,
            cy,
            im_span,
            iter_depth,
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn iter_depth(&self) -> u32 {
        self.iter_depth
    }
    /// Build the viewport for this region at the given pixel size. The
    /// stored span is vertical; the real extent follows the aspect ratio.
    pub fn viewport(&self, width: usize, height: usize) -> Result<Viewport> {
        Viewport::centered(self.cx, self.cy, self.im_span, width, height)
    }
}

pub struct Presets {
    names: Vec<&'static str>,
    values: Vec<Preset>,
}

impl Presets {
    pub fn new() -> Presets {
        let values = vec![
            // The full standard view at its usual depth
            Preset::new("classic", -0.75, 0.0, 2.0, 256),
            Preset::new("flamenco", -1.7665088674631104, 0.04172334239500609, 2.5e-11, 1000),
            Preset::new("spiral", -0.8099833738092991, 0.17004289101216644, 1.35e-7, 1000),
        ];
        let names = values.iter().map(|p| p.name).collect();
        Presets { names, values }
    }
    pub fn names(&self) -> &[&str] {
        self.names.as_slice()
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn get(&self, i: usize) -> &Preset {
        assert!(i < self.len());
        &self.values[i]
    }
    pub fn by_name(&self, name: &str) -> Option<&Preset> {
        self.values.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_consistent() {
        let presets = Presets::new();
        assert_eq!(presets.len(), presets.names().len());
        for i in 0..presets.len() {
            assert_eq!(presets.get(i).name(), presets.names()[i]);
        }
    }

    #[test]
    fn classic_preset_is_the_standard_view() {
        let presets = Presets::new();
        let classic = presets.by_name("classic").unwrap();
        assert_eq!(classic.iter_depth(), 256);
        let vp = classic.viewport(1400, 800).unwrap();
        assert_eq!(vp, Viewport::classic(1400, 800).unwrap());
    }

    #[test]
    fn deep_zoom_presets_build_valid_viewports() {
        let presets = Presets::new();
        for name in ["flamenco", "spiral"] {
            let preset = presets.by_name(name).unwrap();
            let vp = preset.viewport(640, 480).unwrap();
            assert!(vp.validate().is_ok());
            assert!(vp.re_max - vp.re_min < 1e-6);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(Presets::new().by_name("nessie").is_none());
    }
}
