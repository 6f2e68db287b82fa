use directories::ProjectDirs;
use gettextrs::gettext;
use log::{debug, error, info};

use std::{
    fmt,
    fs::{create_dir_all, File},
    io::{self, Write},
    ops::Deref,
    path::{Path, PathBuf},
};

use options::{ApplyEffects, Options, OptionsDraft};

use super::{APP_NAME, SLD, TLD};

const CONFIG_FILENAME: &str = "config.ron";

#[derive(Debug)]
pub enum ConfigDirError {
    NoProjectDirs,
    CreateDir(io::Error),
}

impl fmt::Display for ConfigDirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigDirError::*;

        match self {
            NoProjectDirs => f.write_str(&gettext("couldn't find project dirs for this platform")),
            CreateDir(err) => f.write_str(
                &gettext("couldn't create configuration directory: {}").replacen(
                    "{}",
                    &err.to_string(),
                    1,
                ),
            ),
        }
    }
}

impl std::error::Error for ConfigDirError {}

#[derive(Debug)]
pub enum SaveError {
    CreateDir(io::Error),
    CreateFile(io::Error),
    Serialize(ron::Error),
    Write(io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SaveError::*;

        let (msg, err) = match self {
            CreateDir(err) => (
                gettext("couldn't create configuration directory: {}"),
                err.to_string(),
            ),
            CreateFile(err) => (gettext("couldn't create configuration file: {}"), err.to_string()),
            Serialize(err) => (gettext("couldn't serialize configuration: {}"), err.to_string()),
            Write(err) => (gettext("couldn't write configuration: {}"), err.to_string()),
        };

        f.write_str(&msg.replacen("{}", &err, 1))
    }
}

impl std::error::Error for SaveError {}

/// The live options and the file they're persisted to.
///
/// `last` holds what's on disk so unchanged options are not written back.
#[derive(Debug)]
pub struct GlobalConfig {
    path: PathBuf,
    last: Options,
    current: Options,
}

impl GlobalConfig {
    /// Loads the options from the platform config dir.
    pub fn from_project_dirs() -> Result<GlobalConfig, ConfigDirError> {
        let project_dirs =
            ProjectDirs::from(TLD, SLD, &APP_NAME).ok_or(ConfigDirError::NoProjectDirs)?;
        let config_dir = project_dirs.config_dir();
        create_dir_all(config_dir).map_err(ConfigDirError::CreateDir)?;

        Ok(GlobalConfig::load(config_dir.join(CONFIG_FILENAME)))
    }

    /// Loads the options from `path`.
    ///
    /// A missing or unreadable file yields the default options.
    pub fn load(path: impl Into<PathBuf>) -> GlobalConfig {
        let path = path.into();

        let last = match File::open(&path) {
            Ok(config_file) => match ron::de::from_reader::<_, Options>(config_file) {
                Ok(options) => {
                    debug!("read config: {:?}", options);
                    options
                }
                Err(err) => {
                    error!(
                        "{}",
                        &gettext("couldn't load configuration: {}").replacen(
                            "{}",
                            &err.to_string(),
                            1
                        ),
                    );
                    Options::default()
                }
            },
            Err(err) => {
                info!("no configuration at {}: {}", path.display(), err);
                Options::default()
            }
        };

        GlobalConfig {
            path,
            current: last.clone(),
            last,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open_draft(&self) -> OptionsDraft {
        OptionsDraft::open(&self.current)
    }

    /// Makes the draft the live options. Nothing is written until [`save`].
    ///
    /// [`save`]: GlobalConfig::save
    pub fn commit(&mut self, draft: OptionsDraft) -> ApplyEffects {
        draft.commit(&mut self.current)
    }

    pub fn is_saved(&self) -> bool {
        self.last == self.current
    }

    pub fn save(&mut self) -> Result<(), SaveError> {
        if self.is_saved() {
            debug!("config unchanged, not saving");
            return Ok(());
        }

        let config_str =
            ron::ser::to_string_pretty(&self.current, ron::ser::PrettyConfig::default())
                .map_err(SaveError::Serialize)?;

        if let Some(config_dir) = self.path.parent() {
            create_dir_all(config_dir).map_err(SaveError::CreateDir)?;
        }
        let mut config_file = File::create(&self.path).map_err(SaveError::CreateFile)?;
        config_file
            .write_all(config_str.as_bytes())
            .map_err(SaveError::Write)?;

        self.last = self.current.clone();
        debug!("saved config to {}: {:?}", self.path.display(), self.current);

        Ok(())
    }
}

impl Deref for GlobalConfig {
    type Target = Options;

    fn deref(&self) -> &Self::Target {
        &self.current
    }
}
