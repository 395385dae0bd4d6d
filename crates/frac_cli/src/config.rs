use frac_parser::Bounds;
use frac_session::DEFAULT_CAPACITY;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Store capacity and entry bounds, overridable from `frac_config.toml` in
/// the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FracConfig {
    pub capacity: usize,
    pub min_numerator: i64,
    pub max_numerator: i64,
    pub min_denominator: i64,
    pub max_denominator: i64,
}

impl Default for FracConfig {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            capacity: DEFAULT_CAPACITY,
            min_numerator: bounds.min_numerator,
            max_numerator: bounds.max_numerator,
            min_denominator: bounds.min_denominator,
            max_denominator: bounds.max_denominator,
        }
    }
}

impl FracConfig {
    pub fn load() -> Self {
        let path = Path::new("frac_config.toml");
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => println!("Error parsing config file: {}. Using defaults.", e),
                },
                Err(e) => println!("Error reading config file: {}. Using defaults.", e),
            }
        }
        Self::default()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_numerator: self.min_numerator,
            max_numerator: self.max_numerator,
            min_denominator: self.min_denominator,
            max_denominator: self.max_denominator,
        }
    }
}
