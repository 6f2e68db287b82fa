use gettextrs::gettext;
use log::error;

use std::process;

use application::{get_command_line, init_locale, run, GlobalConfig};

fn main() {
    env_logger::init();

    init_locale();

    let args = get_command_line();

    let mut config = match args.config_path {
        Some(path) => GlobalConfig::load(path),
        None => match GlobalConfig::from_project_dirs() {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        },
    };

    match run(args.command, args.dry_run, &mut config) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            error!(
                "{}",
                gettext("Failed to apply preferences: {}").replacen("{}", &err.to_string(), 1),
            );
            process::exit(1);
        }
    }
}
