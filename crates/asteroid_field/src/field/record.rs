//! Scene object descriptor for a single asteroid

use serde::{Deserialize, Serialize};

use super::catalog::{DIFFUSE_TEXTURE, NORMAL_TEXTURE};
use super::material::MaterialDescriptor;
use crate::foundation::math::{to_array, Vec3d};

const NAME_PREFIX: &str = "Asteroid-";

/// Scene object type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Loaded from a mesh file
    #[default]
    Mesh,
}

/// One asteroid as the scene loader reads it
///
/// Field order here is the key order in the written document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidRecord {
    /// `Asteroid-<index>`, index being the generation order
    pub name: String,
    /// Mesh file from the catalog
    pub model: String,
    /// Always `mesh`
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Shared material block
    pub material: MaterialDescriptor,
    /// World position `[x, y, z]`
    pub position: [f64; 3],
    /// Per-axis scale, identical on every axis
    pub scale: [f64; 3],
    /// Albedo texture file
    pub diffuse_texture: String,
    /// Normal map file
    pub normal_texture: String,
}

impl AsteroidRecord {
    /// Build the record for the `index`-th asteroid
    pub fn new(index: usize, model: &str, position: &Vec3d, scale: &Vec3d) -> Self {
        Self {
            name: Self::name_for(index),
            model: model.to_string(),
            kind: ObjectKind::Mesh,
            material: MaterialDescriptor::default(),
            position: to_array(position),
            scale: to_array(scale),
            diffuse_texture: DIFFUSE_TEXTURE.to_string(),
            normal_texture: NORMAL_TEXTURE.to_string(),
        }
    }

    /// Scene name for the `index`-th asteroid
    pub fn name_for(index: usize) -> String {
        format!("{NAME_PREFIX}{index}")
    }

    /// Generation index recovered from the name, if it has the expected form
    pub fn index(&self) -> Option<usize> {
        self.name.strip_prefix(NAME_PREFIX)?.parse().ok()
    }

    /// Whether all three scale factors are equal
    #[allow(clippy::float_cmp)]
    pub fn is_uniformly_scaled(&self) -> bool {
        let [sx, sy, sz] = self.scale;
        sx == sy && sy == sz
    }

    /// Depth component of the position
    pub const fn depth(&self) -> f64 {
        self.position[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::uniform_scale;

    fn sample_record() -> AsteroidRecord {
        AsteroidRecord::new(
            4,
            "asteroid7.obj",
            &Vec3d::new(1.0, -2.5, -512.0),
            &uniform_scale(0.8),
        )
    }

    #[test]
    fn test_record_fields() {
        let record = sample_record();
        assert_eq!(record.name, "Asteroid-4");
        assert_eq!(record.index(), Some(4));
        assert_eq!(record.kind, ObjectKind::Mesh);
        assert_eq!(record.position, [1.0, -2.5, -512.0]);
        assert!(record.is_uniformly_scaled());
        assert_eq!(record.depth(), -512.0);
    }

    #[test]
    fn test_record_json_keys_in_scene_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let keys = [
            "\"name\"",
            "\"model\"",
            "\"type\"",
            "\"material\"",
            "\"position\"",
            "\"scale\"",
            "\"diffuseTexture\"",
            "\"normalTexture\"",
        ];
        let offsets: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"type\":\"mesh\""));
        assert!(json.contains("\"diffuseTexture\":\"DefaultMaterial_albedo.jpg\""));
        assert!(json.contains("\"normalTexture\":\"DefaultMaterial_normal.png\""));
    }

    #[test]
    fn test_foreign_name_has_no_index() {
        let mut record = sample_record();
        record.name = "new-Object000-0".to_string();
        assert_eq!(record.index(), None);
    }

    #[test]
    fn test_anisotropic_scale_detected() {
        let mut record = sample_record();
        record.scale = [0.0078125, 0.0078125, 0.015625];
        assert!(!record.is_uniformly_scaled());
    }
}
