use bitflags::bitflags;
use log::{debug, warn};

use crate::{
    quality::zoom_increment_from_spin, Modifiers, Options, Projection, StereoMode, StereoTarget,
    ThumbSize, ZoomQuality,
};

bitflags! {
    /// Refreshes required after a draft is committed.
    pub struct ApplyEffects: u32 {
        const NONE = 0b0000_0000;
        const REFRESH_LAYOUT = 0b0000_0001;
        const THUMB_FORMAT_CHANGED = 0b0000_0010;
        const COLORS_UPDATE = 0b0000_0100;
    }
}

/// Working copy of the options edited by the preferences dialog.
///
/// Opening a draft never touches the live options. Dropping it discards
/// the edits, [`OptionsDraft::commit`] replaces the live options at once.
#[derive(Clone, Debug)]
pub struct OptionsDraft {
    base: Options,
    draft: Options,
}

impl OptionsDraft {
    pub fn open(current: &Options) -> Self {
        OptionsDraft {
            base: current.clone(),
            draft: current.clone(),
        }
    }

    /// The options as they were when the draft was opened.
    pub fn base(&self) -> &Options {
        &self.base
    }

    pub fn draft(&self) -> &Options {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Options {
        &mut self.draft
    }

    pub fn is_modified(&self) -> bool {
        self.base != self.draft
    }

    pub fn set_slideshow_hours(&mut self, hours: i64) {
        let delay = &mut self.draft.slideshow.delay;
        *delay = delay.with_hours(hours);
    }

    pub fn set_slideshow_minutes(&mut self, minutes: i64) {
        let delay = &mut self.draft.slideshow.delay;
        *delay = delay.with_minutes(minutes);
    }

    pub fn set_slideshow_seconds(&mut self, seconds: f64) {
        let delay = &mut self.draft.slideshow.delay;
        *delay = delay.with_seconds(seconds);
    }

    /// Applies a stereo menu selection, keeping the modifiers.
    pub fn set_stereo_choice(&mut self, target: StereoTarget, index: usize) {
        let mode = self.draft.stereo.mode_mut(target);
        *mode = mode.with_choice(index, target.allows_fixed());
    }

    pub fn set_stereo_modifiers(&mut self, target: StereoTarget, modifiers: Modifiers) {
        self.draft.stereo.mode_mut(target).modifiers = modifiers;
    }

    /// Replaces the whole stereo mode of `target`.
    ///
    /// The windowed mode can't use a fixed position: it falls back to a
    /// single image.
    pub fn set_stereo_mode(&mut self, target: StereoTarget, mut mode: StereoMode) {
        if mode.projection == Projection::FixedPosition && !target.allows_fixed() {
            warn!("{:?} stereo mode can't use a fixed position, using single image", target);
            mode.projection = Projection::None;
        }
        if !mode.projection.allows_half_size() {
            mode.half_size = false;
        }

        *self.draft.stereo.mode_mut(target) = mode;
    }

    /// Selects the thumbnail size menu entry `index`.
    ///
    /// The custom entry restores the size the draft was opened with.
    pub fn set_thumb_size_choice(&mut self, index: usize) {
        self.draft.thumbnails.max_size =
            ThumbSize::for_choice(index, self.base.thumbnails.max_size);
    }

    pub fn set_zoom_quality_choice(&mut self, index: usize) {
        self.draft.image.zoom_quality = ZoomQuality::for_choice(index);
    }

    pub fn set_thumb_quality_choice(&mut self, index: usize) {
        self.draft.thumbnails.quality = ZoomQuality::for_choice(index);
    }

    pub fn set_zoom_increment_spin(&mut self, value: f64) {
        self.draft.image.zoom_increment = zoom_increment_from_spin(value);
    }

    /// Replaces `live` with the draft and reports what must be refreshed.
    pub fn commit(self, live: &mut Options) -> ApplyEffects {
        let effects = ApplyEffects::between(live, &self.draft);
        debug!("committing options draft, effects {:?}", effects);

        *live = self.draft;

        effects
    }
}

impl ApplyEffects {
    pub fn between(live: &Options, draft: &Options) -> Self {
        let mut effects = ApplyEffects::NONE;

        if live.file_filter != draft.file_filter || live.file_sort != draft.file_sort {
            effects |= ApplyEffects::REFRESH_LAYOUT;
        }

        if live.thumbnails.max_size != draft.thumbnails.max_size
            || live.thumbnails.quality != draft.thumbnails.quality
        {
            effects |= ApplyEffects::THUMB_FORMAT_CHANGED | ApplyEffects::REFRESH_LAYOUT;
        }

        if live.image.use_custom_border_color != draft.image.use_custom_border_color
            || live.image.use_custom_border_color_in_fullscreen
                != draft.image.use_custom_border_color_in_fullscreen
            || live.image.border_color != draft.image.border_color
        {
            effects |= ApplyEffects::COLORS_UPDATE;
        }

        effects
    }
}
