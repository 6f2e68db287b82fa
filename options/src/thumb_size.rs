use serde_derive::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ThumbSize {
    pub width: u32,
    pub height: u32,
}

impl ThumbSize {
    pub const fn new(width: u32, height: u32) -> Self {
        ThumbSize { width, height }
    }

    /// Index of this size in the thumbnail size menu.
    ///
    /// Sizes missing from [`THUMB_SIZES`] select the trailing custom entry.
    pub fn choice_index(self) -> usize {
        THUMB_SIZES
            .iter()
            .position(|size| *size == self)
            .unwrap_or(THUMB_SIZES.len())
    }

    /// Size selected by the menu entry `index`.
    ///
    /// The custom entry (or anything past it) keeps `live`.
    pub fn for_choice(index: usize, live: ThumbSize) -> Self {
        THUMB_SIZES.get(index).copied().unwrap_or(live)
    }

    /// Menu labels for a menu opened while `current` is the live size.
    pub fn choice_labels(current: ThumbSize) -> Vec<String> {
        let mut labels: Vec<String> = THUMB_SIZES.iter().map(ToString::to_string).collect();
        if current.choice_index() == THUMB_SIZES.len() {
            labels.push(format!("Custom {}", current));
        }

        labels
    }
}

impl Default for ThumbSize {
    fn default() -> Self {
        ThumbSize::new(96, 72)
    }
}

impl fmt::Display for ThumbSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

pub const THUMB_SIZES: [ThumbSize; 14] = [
    ThumbSize::new(24, 24),
    ThumbSize::new(32, 32),
    ThumbSize::new(48, 48),
    ThumbSize::new(64, 64),
    ThumbSize::new(96, 72),
    ThumbSize::new(96, 96),
    ThumbSize::new(128, 96),
    ThumbSize::new(128, 128),
    ThumbSize::new(160, 120),
    ThumbSize::new(160, 160),
    ThumbSize::new(192, 144),
    ThumbSize::new(192, 192),
    ThumbSize::new(256, 192),
    ThumbSize::new(256, 256),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_sizes() {
        assert_eq!(4, ThumbSize::default().choice_index());
        assert_eq!(13, ThumbSize::new(256, 256).choice_index());
        assert_eq!(ThumbSize::new(128, 96), ThumbSize::for_choice(6, ThumbSize::default()));

        let labels = ThumbSize::choice_labels(ThumbSize::default());
        assert_eq!(THUMB_SIZES.len(), labels.len());
        assert_eq!("24 x 24", labels[0]);
    }

    #[test]
    fn custom_size() {
        let custom = ThumbSize::new(100, 80);
        assert_eq!(THUMB_SIZES.len(), custom.choice_index());
        assert_eq!(custom, ThumbSize::for_choice(THUMB_SIZES.len(), custom));
        assert_eq!(custom, ThumbSize::for_choice(usize::MAX, custom));

        let labels = ThumbSize::choice_labels(custom);
        assert_eq!(THUMB_SIZES.len() + 1, labels.len());
        assert_eq!(Some(&"Custom 100 x 80".to_owned()), labels.last());
    }
}
