//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_screen_sections() {
        let content = r#"
[screen]
symbols = AAPL, F, GE
top_n = 20
tolerance = 0.01

[data]
path = ./data
lookback_days = 730
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("screen", "symbols"),
            Some("AAPL, F, GE".to_string())
        );
        assert_eq!(adapter.get_string("data", "path"), Some("./data".to_string()));
        assert_eq!(adapter.get_int("screen", "top_n", 10), 20);
        assert_eq!(adapter.get_double("screen", "tolerance", 0.0), 0.01);
        assert_eq!(adapter.get_int("data", "lookback_days", 0), 730);
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[screen]\ntop_n = 10\n").unwrap();
        assert_eq!(adapter.get_string("screen", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_default_for_missing_or_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[screen]\ntop_n = abc\n").unwrap();
        assert_eq!(adapter.get_int("screen", "top_n", 42), 42);
        assert_eq!(adapter.get_int("screen", "missing", 7), 7);
    }

    #[test]
    fn get_double_returns_default_for_missing_or_non_numeric() {
        let adapter =
            FileConfigAdapter::from_string("[screen]\nprice_ceiling = not_a_number\n").unwrap();
        assert_eq!(adapter.get_double("screen", "price_ceiling", 99.9), 99.9);
        assert_eq!(adapter.get_double("screen", "missing", 1.5), 1.5);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\npath = /var/data/bars\n").unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("data", "path"),
            Some("/var/data/bars".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/config.ini");
        assert!(result.is_err());
    }
}
