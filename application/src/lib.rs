use once_cell::sync::Lazy;

pub const TLD: &str = "org";
pub const SLD: &str = "pixview";

// Remove "-application" from `CARGO_PKG_NAME`
pub static APP_NAME: Lazy<String> = Lazy::new(|| {
    let pkg_name = env!("CARGO_PKG_NAME");
    pkg_name
        .rsplit_once('-')
        .map_or(pkg_name, |(app_name, _)| app_name)
        .to_string()
});

mod command_line;
pub use self::command_line::{
    command_line_from, get_command_line, CommandLineArguments, PrefsCommand,
};

mod configuration;
pub use self::configuration::{ConfigDirError, GlobalConfig, SaveError};

mod locale;
pub use self::locale::init_locale;

mod preferences;
pub use self::preferences::{run, PrefsError};
