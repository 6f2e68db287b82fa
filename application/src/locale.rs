use directories::ProjectDirs;
use gettextrs::{TextDomain, TextDomainError};
use log::{error, info, warn};

use super::{APP_NAME, SLD, TLD};

/// Binds the text domain used by the user facing messages.
///
/// Translations under `target` take precedence so that catalogs built
/// during development are picked up.
pub fn init_locale() {
    let text_domain = TextDomain::new(APP_NAME.as_str())
        .codeset("UTF-8")
        .prepend("target");

    let text_domain = match ProjectDirs::from(TLD, SLD, &APP_NAME) {
        Some(project_dirs) => {
            let _app_data_dir = project_dirs.data_dir();

            // FIXME: figure out macOS conventions
            #[cfg(all(target_family = "unix", not(target_os = "macos")))]
            let text_domain = match _app_data_dir.parent() {
                Some(data_dir) => text_domain.prepend(data_dir),
                None => text_domain,
            };

            #[cfg(target_os = "windows")]
            let text_domain = text_domain.prepend(_app_data_dir);

            text_domain
        }
        None => {
            warn!("no data dir for translations on this platform");
            text_domain
        }
    };

    match text_domain.init() {
        Ok(locale) => info!("Translation found, `setlocale` returned {:?}", locale),
        Err(TextDomainError::TranslationNotFound(lang)) => {
            info!("Translation not found for language {}", lang)
        }
        Err(TextDomainError::InvalidLocale(locale)) => error!("Invalid locale {}", locale),
        Err(err) => error!("Couldn't set locale {}", err),
    }
}
