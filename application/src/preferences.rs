use gettextrs::gettext;
use log::{debug, info};

use std::fmt;

use options::{
    quality::zoom_increment_to_spin, ApplyEffects, OptionsDraft, StereoMode, StereoTarget,
    ThumbSize,
};

use super::{GlobalConfig, PrefsCommand, SaveError};

#[derive(Debug)]
pub enum PrefsError {
    Render(ron::Error),
    Save(SaveError),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Render(err) => f.write_str(
                &gettext("couldn't render preferences: {}").replacen("{}", &err.to_string(), 1),
            ),
            PrefsError::Save(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PrefsError {}

impl From<ron::Error> for PrefsError {
    fn from(err: ron::Error) -> Self {
        PrefsError::Render(err)
    }
}

impl From<SaveError> for PrefsError {
    fn from(err: SaveError) -> Self {
        PrefsError::Save(err)
    }
}

/// Runs `command` against `config` and returns the report to print.
///
/// Edits go to a draft which is committed and saved, or dropped when
/// `dry_run` is set.
pub fn run(
    command: PrefsCommand,
    dry_run: bool,
    config: &mut GlobalConfig,
) -> Result<String, PrefsError> {
    match command {
        PrefsCommand::Show => show(config),
        PrefsCommand::DecodeStereo(mask) => Ok(describe_mask(mask)),
        edit => {
            let mut draft = config.open_draft();
            let report = apply_edit(&mut draft, &edit);

            if dry_run {
                info!("dry run: discarding {:?}", edit);
                return Ok(report);
            }

            let effects = config.commit(draft);
            log_effects(effects);
            config.save()?;

            Ok(report)
        }
    }
}

fn apply_edit(draft: &mut OptionsDraft, edit: &PrefsCommand) -> String {
    match *edit {
        PrefsCommand::Stereo { target, mode } => {
            draft.set_stereo_mode(target, mode);
            format!(
                "{}: {}",
                stereo_title(target),
                draft.draft().stereo.mode(target),
            )
        }
        PrefsCommand::Delay {
            hours,
            minutes,
            seconds,
        } => {
            if let Some(hours) = hours {
                draft.set_slideshow_hours(hours);
            }
            if let Some(minutes) = minutes {
                draft.set_slideshow_minutes(minutes);
            }
            if let Some(seconds) = seconds {
                draft.set_slideshow_seconds(seconds);
            }

            format!(
                "{}: {} -> {}",
                gettext("Slideshow delay"),
                draft.base().slideshow.delay,
                draft.draft().slideshow.delay,
            )
        }
        PrefsCommand::ThumbSize(index) => {
            draft.set_thumb_size_choice(index);
            format!(
                "{}: {}",
                gettext("Thumbnail size"),
                draft.draft().thumbnails.max_size,
            )
        }
        PrefsCommand::Quality { index, thumbnails } => {
            let quality = if thumbnails {
                draft.set_thumb_quality_choice(index);
                draft.draft().thumbnails.quality
            } else {
                draft.set_zoom_quality_choice(index);
                draft.draft().image.zoom_quality
            };

            format!("{}: {}", gettext("Quality"), gettext(quality.label()))
        }
        PrefsCommand::Show | PrefsCommand::DecodeStereo(_) => String::new(),
    }
}

fn show(config: &GlobalConfig) -> Result<String, PrefsError> {
    let mut report =
        ron::ser::to_string_pretty(&**config, ron::ser::PrettyConfig::default())?;

    report.push_str(&format!(
        "\n\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
        gettext("Configuration file"),
        config.path().display(),
        gettext("Slideshow delay"),
        config.slideshow.delay,
        stereo_title(StereoTarget::Windowed),
        stereo_label(StereoTarget::Windowed, config.stereo.mode),
        stereo_title(StereoTarget::Fullscreen),
        stereo_label(StereoTarget::Fullscreen, config.stereo.fsmode),
        gettext("Thumbnail size"),
        thumb_size_label(config.thumbnails.max_size),
        gettext("Zoom increment"),
        zoom_increment_to_spin(config.image.zoom_increment),
    ));

    Ok(report)
}

fn describe_mask(mask: u32) -> String {
    let mode = StereoMode::decode(mask);
    let normalized = mode.encode();
    if normalized != mask {
        debug!("mask {:#x} normalized to {:#x}", mask, normalized);
    }

    format!("{:#x}: {} ({:#x})", mask, mode, normalized)
}

fn thumb_size_label(size: ThumbSize) -> String {
    let index = size.choice_index();
    ThumbSize::choice_labels(size)
        .get(index)
        .cloned()
        .unwrap_or_else(|| size.to_string())
}

/// The mode followed by the menu entry it selects.
fn stereo_label(target: StereoTarget, mode: StereoMode) -> String {
    let allow_fixed = target.allows_fixed();
    let entry = StereoMode::choices(allow_fixed)
        .get(mode.choice_index(allow_fixed))
        .map_or("", |choice| choice.label);

    format!("{} [{}]", mode, gettext(entry))
}

fn stereo_title(target: StereoTarget) -> String {
    match target {
        StereoTarget::Windowed => gettext("Windowed stereo mode"),
        StereoTarget::Fullscreen => gettext("Fullscreen stereo mode"),
    }
}

fn log_effects(effects: ApplyEffects) {
    if effects.contains(ApplyEffects::THUMB_FORMAT_CHANGED) {
        info!("thumbnail format changed, cached thumbnails must be rebuilt");
    }
    if effects.contains(ApplyEffects::REFRESH_LAYOUT) {
        info!("file list must be refreshed");
    }
    if effects.contains(ApplyEffects::COLORS_UPDATE) {
        info!("border colors must be updated");
    }
}
