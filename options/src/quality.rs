use serde_derive::{Deserialize, Serialize};

/// Interpolation used when scaling images and thumbnails.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ZoomQuality {
    Nearest,
    Tiles,
    Bilinear,
    Hyper,
}

impl ZoomQuality {
    pub const ALL: [ZoomQuality; 4] = [
        ZoomQuality::Nearest,
        ZoomQuality::Tiles,
        ZoomQuality::Bilinear,
        ZoomQuality::Hyper,
    ];

    pub fn choice_index(self) -> usize {
        self as usize
    }

    /// Unknown entries fall back to the fastest interpolation.
    pub fn for_choice(index: usize) -> Self {
        ZoomQuality::ALL
            .get(index)
            .copied()
            .unwrap_or(ZoomQuality::Nearest)
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomQuality::Nearest => "Nearest (worst, but fastest)",
            ZoomQuality::Tiles => "Tiles",
            ZoomQuality::Bilinear => "Bilinear",
            ZoomQuality::Hyper => "Hyper (best, but slowest)",
        }
    }
}

/// Converts the zoom increment control value (1.0 = 100%) into percents.
pub fn zoom_increment_from_spin(value: f64) -> u32 {
    (value * 100.0 + 0.01).max(0.0) as u32
}

pub fn zoom_increment_to_spin(percent: u32) -> f64 {
    f64::from(percent) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices() {
        for (index, quality) in ZoomQuality::ALL.iter().enumerate() {
            assert_eq!(index, quality.choice_index());
            assert_eq!(*quality, ZoomQuality::for_choice(index));
        }
        assert_eq!(ZoomQuality::Nearest, ZoomQuality::for_choice(4));
    }

    #[test]
    fn zoom_increment() {
        assert_eq!(5, zoom_increment_from_spin(0.05));
        // 0.29 * 100.0 is slightly below 29
        assert_eq!(29, zoom_increment_from_spin(0.29));
        assert_eq!(150, zoom_increment_from_spin(1.5));
        assert_eq!(0, zoom_increment_from_spin(-1.0));
        assert!((zoom_increment_to_spin(25) - 0.25).abs() < 1e-9);
    }
}
