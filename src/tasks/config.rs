/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Config files of the binaries.
//!
//! Keys are kebab-case. Anything not recognized is reported through `warn!`
//! rather than silently dropped, so please deserialize these types through
//! [`YamlRead`] and not directly through `serde_yaml`.

use std::io::Read;

use gfxmat_transform::{Layout, RotationDirection};

/// `serde_yaml::from_reader`, with warnings for unused keys.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only offers one for Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

derive_yaml_read!{Settings}
derive_yaml_read!{[[f32; 4]; 4]}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

// --------------------------------------------------------

/// Config of `gfxmat-mvp`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Layout of every printed matrix. `--row-major` on the command line wins.
    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub model: ModelSettings,

    /// The identity when absent.
    #[serde(default)]
    pub projection: Option<ProjectionSettings>,
}

/// The model matrix is `translate * rotate * scale`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ModelSettings {
    pub translate: [f32; 3],
    pub scale: [f32; 3],
    /// Euler angles in radians. x is applied first.
    pub rotate: [f32; 3],
    pub rotation_direction: RotationDirection,
}

impl Default for ModelSettings {
    fn default() -> Self {
        ModelSettings {
            translate: [0.0; 3],
            scale: [1.0; 3],
            rotate: [0.0; 3],
            rotation_direction: RotationDirection::default(),
        }
    }
}

/// Exactly one of the fields must be present.
///
/// (see `ProjectionSettings::kind`)
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orthographic: Option<Orthographic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frustum: Option<Frustum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye: Option<Eye>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Orthographic {
    /// Minimum corner of the visible box.
    pub position: [f32; 3],
    pub size: [f32; 3],
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Frustum {
    pub near_center: [f32; 3],
    pub near_size: [f32; 2],
    /// Only the z coordinate is used.
    pub far_center: [f32; 3],
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Eye {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub near_size: [f32; 2],
    /// Horizontal and vertical field of view, in radians.
    pub fov: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Settings {
        Settings::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn empty_mapping_is_all_defaults() {
        let settings = parse("{}");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.layout, Layout::ColumnMajor);
        assert_eq!(settings.model.scale, [1.0; 3]);
        assert_eq!(settings.projection, None);
    }

    #[test]
    fn full_config() {
        let settings = parse("
layout: row-major
model:
  translate: [0.0, 0.0, -5.0]
  scale: [2.0, 2.0, 2.0]
  rotate: [0.0, 0.5, 0.0]
  rotation-direction: clockwise
projection:
  frustum:
    near-center: [0, 0, 1]
    near-size: [2, 2]
    far-center: [0, 0, 10]
");
        assert_eq!(settings.layout, Layout::RowMajor);
        assert_eq!(settings.model, ModelSettings {
            translate: [0.0, 0.0, -5.0],
            scale: [2.0, 2.0, 2.0],
            rotate: [0.0, 0.5, 0.0],
            rotation_direction: RotationDirection::Clockwise,
        });
        assert_eq!(settings.projection, Some(ProjectionSettings {
            frustum: Some(Frustum {
                near_center: [0.0, 0.0, 1.0],
                near_size: [2.0, 2.0],
                far_center: [0.0, 0.0, 10.0],
            }),
            ..Default::default()
        }));
    }

    #[test]
    fn partial_model() {
        let settings = parse("model: { rotate: [0.1, 0.2, 0.3] }");
        assert_eq!(settings.model.rotate, [0.1, 0.2, 0.3]);
        assert_eq!(settings.model.translate, [0.0; 3]);
        assert_eq!(settings.model.scale, [1.0; 3]);
        assert_eq!(settings.model.rotation_direction, RotationDirection::CounterClockwise);
    }

    #[test]
    fn eye_and_orthographic() {
        let settings = parse("
projection:
  eye: { eye: [0, 0, 0], center: [0, 0, 10], near-size: [1, 1], fov: [1.2, 1.2] }
");
        let eye = settings.projection.unwrap().eye.unwrap();
        assert_eq!(eye.center, [0.0, 0.0, 10.0]);
        assert_eq!(eye.fov, [1.2, 1.2]);

        let settings = parse("projection: { orthographic: { position: [-1, -1, -1], size: [2, 2, 2] } }");
        let ortho = settings.projection.unwrap().orthographic.unwrap();
        assert_eq!(ortho.position, [-1.0; 3]);
    }

    #[test]
    fn unknown_keys_are_not_fatal() {
        let settings = parse("modle: { scale: [3, 3, 3] }\nlayout: column-major");
        assert_eq!(settings.model, ModelSettings::default());
    }

    #[test]
    fn bad_values() {
        assert!(Settings::from_reader("layout: diagonal".as_bytes()).is_err());
        assert!(Settings::from_reader("model: { scale: [1, 2] }".as_bytes()).is_err());
        assert!(Settings::from_reader("projection: { orthographic: { position: [0, 0, 0] } }".as_bytes()).is_err());
    }

    #[test]
    fn matrix_file() {
        let m = <[[f32; 4]; 4]>::from_reader("
- [3, 2, 4, 1]
- [9, 8, 3, 2]
- [3, 5, 6, 4]
- [5, 2, 3, 5]
".as_bytes()).unwrap();
        assert_eq!(m[1], [9.0, 8.0, 3.0, 2.0]);
        assert!(<[[f32; 4]; 4]>::from_reader("[[1, 2], [3, 4]]".as_bytes()).is_err());
    }
}
