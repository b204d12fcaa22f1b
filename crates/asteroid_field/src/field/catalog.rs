//! Fixed asset names referenced by generated asteroids

use rand::seq::SliceRandom;
use rand::Rng;

/// Asteroid meshes available to the scene loader
pub const ASTEROID_MODELS: [&str; 8] = [
    "asteroid3.obj",
    "asteroid4.obj",
    "asteroid5.obj",
    "asteroid6.obj",
    "asteroid7.obj",
    "asteroid8.obj",
    "asteroid9.obj",
    "asteroid10.obj",
];

/// Albedo texture shared by every asteroid
pub const DIFFUSE_TEXTURE: &str = "DefaultMaterial_albedo.jpg";

/// Normal map shared by every asteroid
pub const NORMAL_TEXTURE: &str = "DefaultMaterial_normal.png";

/// Pick a mesh uniformly from the catalog
pub fn choose_model<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ASTEROID_MODELS
        .choose(rng)
        .copied()
        .unwrap_or(ASTEROID_MODELS[0])
}

/// Whether `model` is one of the catalog meshes
pub fn is_catalog_model(model: &str) -> bool {
    ASTEROID_MODELS.contains(&model)
}
