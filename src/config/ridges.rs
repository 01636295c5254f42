use crate::detector::RidgeOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `detect_ridges` tool.
#[derive(Debug, Deserialize)]
pub struct RidgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub ridge: RidgeOptions,
    pub output: RidgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RidgeOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Polylines painted over the dimmed input.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    /// Eigen magnitude of candidate pixels, normalized to [0, 1].
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RidgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<RidgeToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hessian::Polarity;

    #[test]
    fn minimal_config_uses_default_options() {
        let cfg = parse_config(
            r#"{ "input": "in.png", "output": { "report_json": "out/report.json" } }"#,
        )
        .expect("parse");
        assert_eq!(cfg.input, PathBuf::from("in.png"));
        assert_eq!(cfg.ridge, RidgeOptions::default());
        assert!(cfg.output.overlay_image.is_none());
        assert!(cfg.output.magnitude_image.is_none());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = parse_config(
            r#"{
                "input": "vessels.png",
                "ridge": { "width": 4.5, "polarity": "any", "lower_threshold": 0.02, "min_points": 8 },
                "output": {
                    "report_json": "out/report.json",
                    "overlay_image": "out/overlay.png",
                    "magnitude_image": "out/magnitude.png"
                }
            }"#,
        )
        .expect("parse");
        assert_eq!(cfg.ridge.width, 4.5);
        assert_eq!(cfg.ridge.polarity, Polarity::Any);
        assert_eq!(cfg.ridge.min_points, 8);
        assert_eq!(cfg.output.overlay_image, Some(PathBuf::from("out/overlay.png")));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/ridges.json")).unwrap_err();
        assert!(err.contains("/nonexistent/ridges.json"));
    }
}
