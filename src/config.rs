use std::path::PathBuf;

use config::FileFormat;
use serde::Deserialize;

use crate::utils::get_config_dir;

/// Name of the output file written when neither the CLI nor a config
/// file overrides it.
pub const DEFAULT_OUTPUT_FILE: &str = "expanded_ip_list.txt";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", FileFormat::Json5),
            ("config.json", FileFormat::Json),
            ("config.yaml", FileFormat::Yaml),
            ("config.toml", FileFormat::Toml),
            ("config.ini", FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config_dir.join(file);
            if source.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(source).format(*format).required(false));
        }
        if !found_config {
            log::debug!("No configuration file found, using defaults");
        }

        builder.build()?.try_deserialize()
    }
}
