//! Bake configuration.

use serde::{Deserialize, Serialize};
use voxforge_core::{Error, Result};

/// How exporters write baked colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `#rrggbb`.
    #[default]
    Hex,
    /// Integer channels in `[0, 255]`.
    Rgb,
    /// Float channels in `[0, 1]`.
    Normalized,
}

/// Options controlling a bake.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BakeOptions {
    /// Darken boxes covered by neighbors above them.
    #[serde(rename = "includeAO", alias = "include_ao")]
    pub include_ao: bool,
    /// Scales the per-occluder penalty.
    #[serde(alias = "ao_strength")]
    pub ao_strength: f32,
    /// Add self-illumination of emissive boxes.
    #[serde(alias = "bake_emissive")]
    pub bake_emissive: bool,
    /// Display gamma; colors are raised to `1 / gamma`.
    pub gamma: f32,
    #[serde(alias = "output_format")]
    pub output_format: OutputFormat,
    /// Center distance under which a higher box counts as an occluder.
    #[serde(alias = "ao_radius")]
    pub ao_radius: f32,
    /// Darkening per occluder at full strength.
    #[serde(alias = "ao_penalty")]
    pub ao_penalty: f32,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            include_ao: true,
            ao_strength: 0.5,
            bake_emissive: true,
            gamma: 2.2,
            output_format: OutputFormat::Hex,
            ao_radius: 0.3,
            ao_penalty: 0.2,
        }
    }
}

impl BakeOptions {
    /// Reject settings the baker cannot evaluate.
    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(Error::InvalidOptions(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        for (name, value) in [
            ("aoStrength", self.ao_strength),
            ("aoRadius", self.ao_radius),
            ("aoPenalty", self.ao_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOptions(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Occlusion multiplier for `occluders` boxes above.
    #[inline]
    pub fn occlusion_factor(&self, occluders: usize) -> f32 {
        if !self.include_ao {
            return 1.0;
        }
        (1.0 - occluders as f32 * self.ao_strength * self.ao_penalty).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_validate() {
        assert!(BakeOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_gamma_and_negative_ao() {
        for gamma in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let options = BakeOptions {
                gamma,
                ..Default::default()
            };
            assert!(
                matches!(options.validate(), Err(Error::InvalidOptions(_))),
                "{gamma}"
            );
        }
        let options = BakeOptions {
            ao_radius: -0.1,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn occlusion_factor_floors_at_zero() {
        let options = BakeOptions::default();
        assert_eq!(options.occlusion_factor(0), 1.0);
        assert_relative_eq!(options.occlusion_factor(2), 0.8);
        assert_eq!(options.occlusion_factor(100), 0.0);
        let off = BakeOptions {
            include_ao: false,
            ..Default::default()
        };
        assert_eq!(off.occlusion_factor(100), 1.0);
    }

    #[test]
    fn json_uses_camel_case() {
        let json = serde_json::to_value(BakeOptions::default()).unwrap();
        assert_eq!(json["includeAO"], true);
        assert_eq!(json["outputFormat"], "hex");
        let parsed: BakeOptions = serde_json::from_str(r#"{"gamma": 1.0, "ao_strength": 0.25}"#)
            .unwrap();
        assert_eq!(parsed.gamma, 1.0);
        assert_eq!(parsed.ao_strength, 0.25);
        assert!(parsed.include_ao);
    }
}
