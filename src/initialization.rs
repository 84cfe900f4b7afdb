use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{api_key_from_env, load_config, resolve_api_key, Config, General};
use crate::errors::ConfigError;
use crate::manager_open_weather::OpenWeather;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {m}{n}";

/// Loads configuration, sets up logging and returns the configuration along with
/// an OpenWeather struct ready for use
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn init(config_path: &str) -> Result<(Config, OpenWeather), ConfigError> {
    let config = load_config(config_path)?;

    setup_logger(&config.general)?;

    info!("weather_digest version: {}", env!("CARGO_PKG_VERSION"));

    let api_key = resolve_api_key(&config.open_weather, api_key_from_env())?;
    let open_weather = OpenWeather::new(&config.open_weather, api_key);

    Ok((config, open_weather))
}

/// Sets up log4rs with a file appender and, if configured, a console appender
///
/// # Arguments
///
/// * 'general' - the general part of the configuration
fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
