use clap::{error::ErrorKind, value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use gettextrs::gettext;

use std::{ffi::OsString, path::PathBuf, str::FromStr};

use options::{
    slideshow_delay::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS_FIELD, MIN_SECONDS},
    Modifiers, Projection, StereoMode, StereoTarget,
};

use super::APP_NAME;

const CONFIG_ARG: &str = "CONFIG";
const DRY_RUN_ARG: &str = "DRY_RUN";

const SHOW_CMD: &str = "show";
const DECODE_STEREO_CMD: &str = "decode-stereo";
const STEREO_CMD: &str = "stereo";
const DELAY_CMD: &str = "delay";
const THUMB_SIZE_CMD: &str = "thumb-size";
const QUALITY_CMD: &str = "quality";

const MASK_ARG: &str = "MASK";
const PROJECTION_ARG: &str = "PROJECTION";
const INDEX_ARG: &str = "INDEX";
const FULLSCREEN_ARG: &str = "fullscreen";
const HALF_ARG: &str = "half";
const MIRROR_LEFT_ARG: &str = "mirror-left";
const FLIP_LEFT_ARG: &str = "flip-left";
const MIRROR_RIGHT_ARG: &str = "mirror-right";
const FLIP_RIGHT_ARG: &str = "flip-right";
const SWAP_ARG: &str = "swap";
const TEMP_DISABLE_ARG: &str = "temp-disable";
const HOURS_ARG: &str = "hours";
const MINUTES_ARG: &str = "minutes";
const SECONDS_ARG: &str = "seconds";
const THUMBNAILS_ARG: &str = "thumbnails";

#[derive(Clone, Debug, PartialEq)]
pub enum PrefsCommand {
    Show,
    DecodeStereo(u32),
    Stereo {
        target: StereoTarget,
        mode: StereoMode,
    },
    Delay {
        hours: Option<i64>,
        minutes: Option<i64>,
        seconds: Option<f64>,
    },
    ThumbSize(usize),
    Quality {
        index: usize,
        thumbnails: bool,
    },
}

impl PrefsCommand {
    pub fn edits_options(&self) -> bool {
        !matches!(self, PrefsCommand::Show | PrefsCommand::DecodeStereo(_))
    }
}

#[derive(Debug)]
pub struct CommandLineArguments {
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
    pub command: PrefsCommand,
}

pub fn get_command_line() -> CommandLineArguments {
    command_line_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
}

pub fn command_line_from<I, T>(args: I) -> Result<CommandLineArguments, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| command().error(ErrorKind::MissingSubcommand, gettext("missing command")))?;

    let command = match name {
        SHOW_CMD => PrefsCommand::Show,
        DECODE_STEREO_CMD => PrefsCommand::DecodeStereo(*required(sub_matches, MASK_ARG)?),
        STEREO_CMD => stereo_command(sub_matches)?,
        DELAY_CMD => PrefsCommand::Delay {
            hours: sub_matches.get_one::<i64>(HOURS_ARG).copied(),
            minutes: sub_matches.get_one::<i64>(MINUTES_ARG).copied(),
            seconds: sub_matches.get_one::<f64>(SECONDS_ARG).copied(),
        },
        THUMB_SIZE_CMD => PrefsCommand::ThumbSize(*required(sub_matches, INDEX_ARG)?),
        QUALITY_CMD => PrefsCommand::Quality {
            index: *required(sub_matches, INDEX_ARG)?,
            thumbnails: sub_matches.get_flag(THUMBNAILS_ARG),
        },
        other => {
            return Err(command().error(
                ErrorKind::InvalidSubcommand,
                gettext("unknown command {}").replacen("{}", other, 1),
            ))
        }
    };

    Ok(CommandLineArguments {
        config_path: sub_matches.get_one::<PathBuf>(CONFIG_ARG).cloned(),
        dry_run: sub_matches.get_flag(DRY_RUN_ARG),
        command,
    })
}

fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T, clap::Error>
where
    T: std::any::Any + Clone + Send + Sync + 'static,
{
    matches.get_one::<T>(id).ok_or_else(|| {
        command().error(
            ErrorKind::MissingRequiredArgument,
            gettext("missing argument {}").replacen("{}", id, 1),
        )
    })
}

fn stereo_command(matches: &ArgMatches) -> Result<PrefsCommand, clap::Error> {
    let projection = *required::<Projection>(matches, PROJECTION_ARG)?;
    let half_size = matches.get_flag(HALF_ARG);

    let target = if matches.get_flag(FULLSCREEN_ARG) {
        StereoTarget::Fullscreen
    } else {
        StereoTarget::Windowed
    };

    if projection == Projection::FixedPosition && !target.allows_fixed() {
        return Err(command().error(
            ErrorKind::ArgumentConflict,
            gettext("fixed position is only available in fullscreen"),
        ));
    }
    if half_size && !projection.allows_half_size() {
        return Err(command().error(
            ErrorKind::ArgumentConflict,
            gettext("half size requires side-by-side or top-bottom"),
        ));
    }

    let mode = StereoMode {
        projection,
        half_size,
        modifiers: Modifiers {
            mirror_left: matches.get_flag(MIRROR_LEFT_ARG),
            flip_left: matches.get_flag(FLIP_LEFT_ARG),
            mirror_right: matches.get_flag(MIRROR_RIGHT_ARG),
            flip_right: matches.get_flag(FLIP_RIGHT_ARG),
            swap_left_right: matches.get_flag(SWAP_ARG),
            temporarily_disabled: matches.get_flag(TEMP_DISABLE_ARG),
        },
    };

    Ok(PrefsCommand::Stereo { target, mode })
}

fn parse_mask(value: &str) -> Result<u32, String> {
    let res = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };

    res.map_err(|err| err.to_string())
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds = value.parse::<f64>().map_err(|err| err.to_string())?;
    if (MIN_SECONDS..=MAX_SECONDS_FIELD).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(gettext("expected a value between {} and {}")
            .replacen("{}", &MIN_SECONDS.to_string(), 1)
            .replacen("{}", &MAX_SECONDS_FIELD.to_string(), 1))
    }
}

fn flag(id: &'static str, help: String) -> Arg {
    Arg::new(id).long(id).action(ArgAction::SetTrue).help(help)
}

fn index_arg(help: String) -> Arg {
    Arg::new(INDEX_ARG)
        .required(true)
        .value_parser(value_parser!(usize))
        .help(help)
}

fn command() -> Command {
    Command::new(APP_NAME.as_str())
        .version(env!("CARGO_PKG_VERSION"))
        .about(gettext("Show and edit the image viewer preferences"))
        .subcommand_required(true)
        .arg(
            Arg::new(CONFIG_ARG)
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help(gettext("Use this configuration file instead of the default one")),
        )
        .arg(
            Arg::new(DRY_RUN_ARG)
                .short('n')
                .long("dry-run")
                .global(true)
                .action(ArgAction::SetTrue)
                .help(gettext("Show the result of an edit without saving it")),
        )
        .subcommand(Command::new(SHOW_CMD).about(gettext("Print the current preferences")))
        .subcommand(
            Command::new(DECODE_STEREO_CMD)
                .about(gettext("Decode a stereo mode mask"))
                .arg(
                    Arg::new(MASK_ARG)
                        .required(true)
                        .value_parser(parse_mask)
                        .help(gettext("Mask as a decimal or 0x prefixed hexadecimal value")),
                ),
        )
        .subcommand(
            Command::new(STEREO_CMD)
                .about(gettext("Set the windowed or fullscreen stereo mode"))
                .arg(
                    Arg::new(PROJECTION_ARG)
                        .required(true)
                        .value_parser(Projection::from_str)
                        .help(gettext(
                            "none, anaglyph-red-cyan, side-by-side, top-bottom, fixed...",
                        )),
                )
                .arg(flag(FULLSCREEN_ARG, gettext("Edit the fullscreen stereo mode")))
                .arg(flag(HALF_ARG, gettext("Half size images")))
                .arg(flag(MIRROR_LEFT_ARG, gettext("Mirror left image")))
                .arg(flag(FLIP_LEFT_ARG, gettext("Flip left image")))
                .arg(flag(MIRROR_RIGHT_ARG, gettext("Mirror right image")))
                .arg(flag(FLIP_RIGHT_ARG, gettext("Flip right image")))
                .arg(flag(SWAP_ARG, gettext("Swap left and right images")))
                .arg(flag(
                    TEMP_DISABLE_ARG,
                    gettext("Disable stereo mode on single image source"),
                )),
        )
        .subcommand(
            Command::new(DELAY_CMD)
                .about(gettext("Set the slideshow delay"))
                .arg(
                    Arg::new(HOURS_ARG)
                        .long(HOURS_ARG)
                        .value_parser(value_parser!(i64).range(0..=i64::from(MAX_HOURS))),
                )
                .arg(
                    Arg::new(MINUTES_ARG)
                        .long(MINUTES_ARG)
                        .value_parser(value_parser!(i64).range(0..=i64::from(MAX_MINUTES))),
                )
                .arg(
                    Arg::new(SECONDS_ARG)
                        .long(SECONDS_ARG)
                        .value_parser(parse_seconds),
                )
                .group(
                    ArgGroup::new("fields")
                        .args([HOURS_ARG, MINUTES_ARG, SECONDS_ARG])
                        .multiple(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(THUMB_SIZE_CMD)
                .about(gettext("Select a thumbnail size from the size list"))
                .arg(index_arg(gettext("Position in the size list"))),
        )
        .subcommand(
            Command::new(QUALITY_CMD)
                .about(gettext("Select the zoom interpolation quality"))
                .arg(index_arg(gettext(
                    "0: nearest, 1: tiles, 2: bilinear, 3: hyper",
                )))
                .arg(flag(THUMBNAILS_ARG, gettext("Apply to thumbnails instead of images"))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommandLineArguments, clap::Error> {
        command_line_from(std::iter::once("pixview").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition() {
        command().debug_assert();
    }

    #[test]
    fn show() {
        let args = parse(&["show"]).unwrap();
        assert_eq!(PrefsCommand::Show, args.command);
        assert!(args.config_path.is_none());
        assert!(!args.dry_run);
        assert!(!args.command.edits_options());

        let args = parse(&["-c", "/tmp/prefs.ron", "show", "--dry-run"]).unwrap();
        assert_eq!(Some(PathBuf::from("/tmp/prefs.ron")), args.config_path);
        assert!(args.dry_run);
    }

    #[test]
    fn decode_stereo() {
        let args = parse(&["decode-stereo", "0x100004"]).unwrap();
        assert_eq!(PrefsCommand::DecodeStereo(0x10_0004), args.command);

        let args = parse(&["decode-stereo", "32"]).unwrap();
        assert_eq!(PrefsCommand::DecodeStereo(32), args.command);

        assert!(parse(&["decode-stereo", "0xzz"]).is_err());
    }

    #[test]
    fn stereo() {
        let args = parse(&["stereo", "top-bottom", "--half", "--swap", "--fullscreen"]).unwrap();
        let mut expected = StereoMode::new(Projection::TopBottom);
        expected.half_size = true;
        expected.modifiers.swap_left_right = true;
        assert_eq!(
            PrefsCommand::Stereo {
                target: StereoTarget::Fullscreen,
                mode: expected,
            },
            args.command,
        );
        assert!(args.command.edits_options());

        let args = parse(&["stereo", "anaglyph-gray-yellow-blue", "--mirror-left"]).unwrap();
        match args.command {
            PrefsCommand::Stereo { target, mode } => {
                assert_eq!(StereoTarget::Windowed, target);
                assert_eq!(Projection::AnaglyphGrayYellowBlue, mode.projection);
                assert!(mode.modifiers.mirror_left);
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(parse(&["stereo", "fixed"]).is_err());
        assert!(parse(&["stereo", "fixed", "--fullscreen"]).is_ok());
        assert!(parse(&["stereo", "anaglyph-red-cyan", "--half"]).is_err());
        assert!(parse(&["stereo", "diagonal"]).is_err());
    }

    #[test]
    fn delay() {
        let args = parse(&["delay", "--minutes", "2", "--seconds", "5.3"]).unwrap();
        assert_eq!(
            PrefsCommand::Delay {
                hours: None,
                minutes: Some(2),
                seconds: Some(5.3),
            },
            args.command,
        );

        assert!(parse(&["delay"]).is_err());
        assert!(parse(&["delay", "--hours", "24"]).is_err());
        assert!(parse(&["delay", "--seconds", "60"]).is_err());
        assert!(parse(&["delay", "--seconds", "0"]).is_err());
    }

    #[test]
    fn choices() {
        let args = parse(&["thumb-size", "3"]).unwrap();
        assert_eq!(PrefsCommand::ThumbSize(3), args.command);

        let args = parse(&["quality", "--thumbnails", "1", "-n"]).unwrap();
        assert_eq!(
            PrefsCommand::Quality {
                index: 1,
                thumbnails: true,
            },
            args.command,
        );
        assert!(args.dry_run);

        assert!(parse(&[]).is_err());
    }
}
