//! Material block written for every asteroid

use serde::{Deserialize, Serialize};

/// Blinn-Phong material parameters in the scene file's layout
///
/// The integer fields are kept as integers so the document reads
/// `"n": 10` rather than `"n": 10.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDescriptor {
    /// Diffuse color (RGB)
    pub diffuse: [f64; 3],
    /// Ambient color (RGB)
    pub ambient: [f64; 3],
    /// Specular color (RGB)
    pub specular: [f64; 3],
    /// Specular exponent
    pub n: u32,
    /// Opacity
    pub alpha: u32,
    /// Shader selector understood by the scene renderer
    pub shader_type: u32,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            diffuse: [0.1, 0.1, 0.1],
            ambient: [0.05, 0.05, 0.05],
            specular: [0.1, 0.1, 0.1],
            n: 10,
            alpha: 1,
            shader_type: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_json_layout() {
        let value = serde_json::to_value(MaterialDescriptor::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "diffuse": [0.1, 0.1, 0.1],
                "ambient": [0.05, 0.05, 0.05],
                "specular": [0.1, 0.1, 0.1],
                "n": 10,
                "alpha": 1,
                "shaderType": 3
            })
        );
    }
}
