use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use pathlimits_kinematics::{ConstraintsError, DriveConstraints, Pose};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "PATHLIMITS";

/// Drive capability limits of one robot profile.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveSettings {
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub max_angular_velocity: f64,
    pub max_angular_acceleration: f64,
}

impl DriveSettings {
    /// Validates the limits and builds the drive-limit policy.
    pub fn build(&self) -> Result<DriveConstraints, ConstraintsError> {
        DriveConstraints::new(
            self.max_velocity,
            self.max_acceleration,
            self.max_angular_velocity,
            self.max_angular_acceleration,
        )
    }
}

/// A path sample to evaluate, given as its pose derivative.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleSettings {
    pub heading_deriv: f64,
    #[serde(default = "unit_x_deriv")]
    pub x_deriv: f64,
    #[serde(default)]
    pub y_deriv: f64,
}

fn unit_x_deriv() -> f64 {
    1.0
}

impl SampleSettings {
    pub fn pose_deriv(&self) -> Pose {
        Pose::new(self.x_deriv, self.y_deriv, self.heading_deriv)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub drive: DriveSettings,
    #[serde(default)]
    pub samples: Vec<SampleSettings>,
}

/// Loads the TOML file at `path`, layered with `PATHLIMITS__*` environment overrides.
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match settings {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

pub fn load_settings(path: &str) -> Result<Settings, ConfigError> {
    load_config(path)?.try_deserialize()
}

/// Parses settings from TOML text, without environment overrides.
pub fn parse_settings(toml: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"
        [drive]
        max_velocity = 30.0
        max_acceleration = 30.0
        max_angular_velocity = 2.0
        max_angular_acceleration = 2.0

        [[samples]]
        heading_deriv = 0.5

        [[samples]]
        heading_deriv = -0.1
        x_deriv = 0.0
        y_deriv = 1.0
    "#;

    #[test]
    fn test_parse_settings() {
        let settings = parse_settings(PROFILE).unwrap();
        assert_eq!(settings.drive.max_velocity, 30.0);
        assert_eq!(settings.drive.max_angular_acceleration, 2.0);
        assert_eq!(settings.samples.len(), 2);
        assert_eq!(settings.samples[0].pose_deriv(), Pose::new(1.0, 0.0, 0.5));
        assert_eq!(settings.samples[1].pose_deriv(), Pose::new(0.0, 1.0, -0.1));
    }

    #[test]
    fn test_samples_are_optional() {
        let toml = r#"
            [drive]
            max_velocity = 1.0
            max_acceleration = 2.0
            max_angular_velocity = 3.0
            max_angular_acceleration = 4.0
        "#;
        let settings = parse_settings(toml).unwrap();
        assert!(settings.samples.is_empty());
        let constraints = settings.drive.build().unwrap();
        assert_eq!(constraints.max_angular_velocity(), 3.0);
    }

    #[test]
    fn test_missing_drive_section_fails() {
        let toml = r#"
            [[samples]]
            heading_deriv = 0.5
        "#;
        assert!(parse_settings(toml).is_err());
    }

    #[test]
    fn test_build_rejects_invalid_limit() {
        let toml = r#"
            [drive]
            max_velocity = 1.0
            max_acceleration = 0.0
            max_angular_velocity = 3.0
            max_angular_acceleration = 4.0
        "#;
        let settings = parse_settings(toml).unwrap();
        assert!(matches!(
            settings.drive.build(),
            Err(ConstraintsError::InvalidMaxAcceleration(_))
        ));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_settings("config/does-not-exist.toml").is_err());
    }

    #[test]
    fn test_load_default_profile() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
        let settings = load_settings(path).unwrap();
        assert!(settings.drive.build().is_ok());
        assert!(!settings.samples.is_empty());
    }
}
