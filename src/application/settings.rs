//! Functions for loading demo settings.

use std::fs;
use std::path::Path;

use crate::curve::CurveParams;
use crate::errors::*;
use crate::particles::ParticleParams;
use crate::scene::{CameraParams, FlightParams, FlyCamera};

use super::time::ClockParams;

/// A structure containing configuration data for the demos. Every field has a
/// default matching the original setup, so a settings file only needs to name
/// the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub curve: CurveParams,
    pub particles: ParticleParams,
    pub camera: CameraParams,
    pub flight: FlightParams,
    pub clock: ClockParams,
}

#[derive(Debug, Fail, PartialEq)]
pub enum SettingsError {
    #[fail(display = "The sweep length of curve animation cannot be zero.")]
    ZeroCurveCount,
    #[fail(display = "The viewport cannot be empty, found: {}x{}.", _0, _1)]
    EmptyViewport(u32, u32),
    #[fail(display = "The capacity of particle pool cannot be zero.")]
    ZeroParticleCapacity,
    #[fail(display = "The lifespan of particles must be positive, found: {}.", _0)]
    NonPositiveLifespan(f32),
    #[fail(display = "The {} bounds cannot be negative, found: {}.", _0, _1)]
    NegativeBounds(&'static str, f32),
    #[fail(display = "The explosion length of chests cannot be zero.")]
    ZeroChestOffset,
    #[fail(display = "The near plane distance must be positive, found: {}.", _0)]
    NonPositiveNearPlane(f32),
    #[fail(
        display = "The far plane cannot be closer than the near plane, found: far: {}, near: {}.",
        _0, _1
    )]
    FarPlaneTooClose(f32, f32),
    #[fail(display = "The camera zoom must be within [{}, {}] degrees, found: {}.", _1, _2, _0)]
    ZoomOutOfRange(f32, f32, f32),
}

impl Settings {
    /// Parses settings from a JSON document and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loads settings from {:?}.", path);

        let json = fs::read_to_string(path)
            .map_err(|err| err_format!("Failed to read settings {:?}: {}", path, err))?;

        Self::from_json(&json)
    }

    /// Serializes the settings into a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the preconditions the demo components rely on.
    pub fn validate(&self) -> ::std::result::Result<(), SettingsError> {
        let result = self.check();
        if let Err(ref err) = result {
            warn!("Invalid settings: {}", err);
        }

        result
    }

    fn check(&self) -> ::std::result::Result<(), SettingsError> {
        if self.curve.max_count == 0 {
            return Err(SettingsError::ZeroCurveCount);
        }

        let viewport = self.curve.viewport;
        if viewport.x == 0 || viewport.y == 0 {
            return Err(SettingsError::EmptyViewport(viewport.x, viewport.y));
        }

        if self.particles.capacity == 0 {
            return Err(SettingsError::ZeroParticleCapacity);
        }

        if !(self.particles.lifespan > 0.0) {
            return Err(SettingsError::NonPositiveLifespan(self.particles.lifespan));
        }

        if self.flight.chest_size < 0.0 {
            return Err(SettingsError::NegativeBounds("chest", self.flight.chest_size));
        }

        if self.flight.aircraft_size < 0.0 {
            return Err(SettingsError::NegativeBounds(
                "aircraft",
                self.flight.aircraft_size,
            ));
        }

        if self.flight.chest_max_offset == 0 {
            return Err(SettingsError::ZeroChestOffset);
        }

        let camera = &self.camera;
        if !(camera.near > 0.0) {
            return Err(SettingsError::NonPositiveNearPlane(camera.near));
        }

        if !(camera.far > camera.near) {
            return Err(SettingsError::FarPlaneTooClose(camera.far, camera.near));
        }

        if !(camera.zoom >= FlyCamera::MIN_ZOOM && camera.zoom <= FlyCamera::MAX_ZOOM) {
            return Err(SettingsError::ZoomOutOfRange(
                camera.zoom,
                FlyCamera::MIN_ZOOM,
                FlyCamera::MAX_ZOOM,
            ));
        }

        Ok(())
    }
}
