//! Constants used throughout the laravel-skeleton application

/// Location of the prepackaged skeleton archive.
pub const SKELETON_ARCHIVE_URL: &str =
    "https://raw.githubusercontent.com/framgia/laravel-skeleton/master/skeleton.zip";

/// Location of the denylist manifest, one relative path per line.
pub const DENYLIST_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/framgia/laravel-skeleton/master/deleteFiles.txt";

/// Location of the container-orchestration scaffold archive.
pub const DOCKER_ARCHIVE_URL: &str =
    "https://raw.githubusercontent.com/framgia/laravel-skeleton/master/docker.zip";

/// Location of the docker-compose template.
pub const COMPOSE_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/framgia/laravel-skeleton/master/docker-compose.yml.sample";

/// Prefix of the temporary skeleton archive file name.
pub const SKELETON_TEMP_PREFIX: &str = "laravel_skeleton_";

/// Prefix of the temporary docker archive file name.
pub const DOCKER_TEMP_PREFIX: &str = "docker_";

/// Extension of downloaded archive files.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Generated model file stripped from the extracted skeleton.
pub const USER_MODEL_PATH: &str = "app/User.php";

/// Name of the generated compose file inside the target directory.
pub const COMPOSE_FILENAME: &str = "docker-compose.yml";

/// Placeholder token substituted with the project name.
pub const PROJECT_NAME_PLACEHOLDER: &str = "{project_name}";

/// Local composer wrapper looked up in the working directory.
pub const COMPOSER_PHAR: &str = "composer.phar";

/// Composer binary expected on PATH when no local wrapper exists.
pub const COMPOSER_BIN: &str = "composer";

/// PHP interpreter used to run a local composer.phar.
pub const PHP_BIN: &str = "php";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
