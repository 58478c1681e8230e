use pmaze::Cell;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};

use crate::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charset {
    pub wall: char,
    pub open: char,
    pub path: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            wall: '#',
            open: ' ',
            path: '.',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_size")]
    pub height: usize,
    #[serde(default = "default_size")]
    pub width: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub solve: bool,
    #[serde(default)]
    pub start: Option<Cell>,
    #[serde(default)]
    pub end: Option<Cell>,
    #[serde(default)]
    pub charset: Charset,
}

fn default_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height: default_size(),
            width: default_size(),
            seed: None,
            solve: false,
            start: None,
            end: None,
            charset: Charset::default(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pmaze")
            .join("settings.ron")
    }

    /// Loads settings from `path`. A missing file gives the defaults unless `required` is set.
    pub fn load(path: PathBuf, required: bool) -> Result<Self, AppError> {
        let settings_string = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                log::debug!("No settings at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings = options.from_str(&settings_string)?;
        log::debug!("Loaded settings from {:?}", path);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Settings {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .unwrap()
    }

    #[test]
    fn empty_is_default() {
        let settings = parse("()");
        assert_eq!((settings.height, settings.width), (10, 10));
        assert_eq!(settings.seed, None);
        assert!(!settings.solve);
        assert_eq!(settings.charset.wall, '#');
    }

    #[test]
    fn implicit_some() {
        let settings = parse("(height: 4, seed: 42, start: (1, 1), charset: (wall: '@', open: '-', path: '*'))");
        assert_eq!(settings.height, 4);
        assert_eq!(settings.width, 10);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.start, Some(Cell(1, 1)));
        assert_eq!(settings.charset.path, '*');
    }

    #[test]
    fn missing_file() {
        let path = PathBuf::from("/definitely/not/here/settings.ron");
        assert!(Settings::load(path.clone(), false).is_ok());
        assert!(matches!(Settings::load(path, true), Err(AppError::Io(_))));
    }
}
