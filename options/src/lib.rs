mod draft;
pub use self::draft::{ApplyEffects, OptionsDraft};

mod model;
pub use self::model::{
    FileFilter, FileSort, Fullscreen, Image, Options, Rgb16, Slideshow, Stereo, Thumbnails,
};

pub mod quality;
pub use self::quality::ZoomQuality;

pub mod slideshow_delay;
pub use self::slideshow_delay::{DelayComponents, SlideshowDelay, MIN_DELAY};

mod stereo;
pub use self::stereo::{
    Modifiers, Projection, StereoChoice, StereoFlags, StereoMode, StereoTarget, UnknownProjection,
};

mod thumb_size;
pub use self::thumb_size::{ThumbSize, THUMB_SIZES};
