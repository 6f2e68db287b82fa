use serde_derive::{Deserialize, Serialize};

use crate::{SlideshowDelay, StereoMode, StereoTarget, ThumbSize, ZoomQuality};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb16 {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Image {
    pub zoom_quality: ZoomQuality,
    /// Percents.
    pub zoom_increment: u32,
    pub zoom_2pass: bool,
    pub use_custom_border_color: bool,
    pub use_custom_border_color_in_fullscreen: bool,
    pub border_color: Rgb16,
}

impl Default for Image {
    fn default() -> Self {
        Image {
            zoom_quality: ZoomQuality::Bilinear,
            zoom_increment: 5,
            zoom_2pass: true,
            use_custom_border_color: false,
            use_custom_border_color_in_fullscreen: true,
            border_color: Rgb16::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Thumbnails {
    pub max_size: ThumbSize,
    pub quality: ZoomQuality,
    pub enable_caching: bool,
}

impl Default for Thumbnails {
    fn default() -> Self {
        Thumbnails {
            max_size: ThumbSize::default(),
            quality: ZoomQuality::Tiles,
            enable_caching: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FileFilter {
    pub show_hidden_files: bool,
    pub show_parent_directory: bool,
    pub show_dot_directory: bool,
    pub disable_file_extension_checks: bool,
    pub disable: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FileSort {
    pub case_sensitive: bool,
    pub natural: bool,
}

impl Default for FileSort {
    fn default() -> Self {
        FileSort {
            case_sensitive: true,
            natural: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Slideshow {
    pub delay: SlideshowDelay,
    pub random: bool,
    pub repeat: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Fullscreen {
    /// -1: determined by the window manager.
    pub screen: i32,
    pub clean_flip: bool,
    pub disable_saver: bool,
    pub above: bool,
}

impl Default for Fullscreen {
    fn default() -> Self {
        Fullscreen {
            screen: -1,
            clean_flip: false,
            disable_saver: true,
            above: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Stereo {
    pub mode: StereoMode,
    pub fsmode: StereoMode,
    pub enable_fsmode: bool,
    pub fixed_w: u32,
    pub fixed_h: u32,
    pub fixed_x1: u32,
    pub fixed_y1: u32,
    pub fixed_x2: u32,
    pub fixed_y2: u32,
}

impl Stereo {
    pub fn mode(&self, target: StereoTarget) -> StereoMode {
        match target {
            StereoTarget::Windowed => self.mode,
            StereoTarget::Fullscreen => self.fsmode,
        }
    }

    pub fn mode_mut(&mut self, target: StereoTarget) -> &mut StereoMode {
        match target {
            StereoTarget::Windowed => &mut self.mode,
            StereoTarget::Fullscreen => &mut self.fsmode,
        }
    }
}

impl Default for Stereo {
    fn default() -> Self {
        Stereo {
            mode: StereoMode::default(),
            fsmode: StereoMode::default(),
            enable_fsmode: false,
            fixed_w: 1920,
            fixed_h: 1080,
            fixed_x1: 0,
            fixed_y1: 0,
            fixed_x2: 0,
            fixed_y2: 1125,
        }
    }
}

/// Everything the preferences dialog edits.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Options {
    pub image: Image,
    pub thumbnails: Thumbnails,
    pub file_filter: FileFilter,
    pub file_sort: FileSort,
    pub slideshow: Slideshow,
    pub fullscreen: Fullscreen,
    pub stereo: Stereo,
}
