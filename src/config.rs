//! Run configuration, read from TOML.
//!
//! ```toml
//! [design]
//! gear_ratio = 17
//! ball_diameter = 6.0
//! ring_outer_radius = 38.0
//!
//! [drawing]
//! balls = false
//!
//! [output]
//! dxf = "vptc6.dxf"
//! ```
//! Every table and key is optional and falls back to [`Config::default`].

use crate::design::DesignInputs;
use crate::io::IoError;
use crate::sketch::DrawingSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub design: DesignInputs,
    /// What goes into the DXF file and the SVG plot alike
    pub drawing: DrawingSpec,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dxf: PathBuf,
    /// `None` disables the plot
    pub svg: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dxf: PathBuf::from("vptc6.dxf"),
            svg: Some(PathBuf::from("vptc6.svg")),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Config, IoError> {
        toml::from_str(text).map_err(|err| IoError::MalformedInput(err.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Config, IoError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
