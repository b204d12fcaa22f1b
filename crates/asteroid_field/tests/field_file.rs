//! End-to-end checks on the written field document

use asteroid_field::field::catalog::ASTEROID_MODELS;
use asteroid_field::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn write_seeded(dir: &std::path::Path, seed: u64) -> (std::path::PathBuf, String) {
    let config = FieldConfig {
        output_path: dir.join("asteroids.json"),
        ..FieldConfig::default()
    };
    let generator = FieldGenerator::new(config).unwrap();
    let records = generator.generate(&mut StdRng::seed_from_u64(seed));
    let document = output::write_field(&generator.config().output_path, &records).unwrap();
    (generator.config().output_path.clone(), document)
}

#[test]
fn seeded_run_writes_scene_document() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _) = write_seeded(dir.path(), 99);

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let objects = value.as_array().expect("document should be a JSON array");
    assert_eq!(objects.len(), 100);

    let first = &objects[0];
    assert_eq!(first["name"], "Asteroid-0");
    assert_eq!(first["type"], "mesh");
    assert!(ASTEROID_MODELS.contains(&first["model"].as_str().unwrap()));

    let x = first["position"][0].as_f64().unwrap();
    let y = first["position"][1].as_f64().unwrap();
    let z = first["position"][2].as_f64().unwrap();
    assert!((-15.0..=20.0).contains(&x));
    assert!((-10.0..=10.0).contains(&y));
    assert!((-800.0..=-400.0).contains(&z));

    let scale = first["scale"].as_array().unwrap();
    assert_eq!(scale.len(), 3);
    assert_eq!(scale[0], scale[1]);
    assert_eq!(scale[1], scale[2]);
    assert!((0.3..=2.2).contains(&scale[0].as_f64().unwrap()));

    assert_eq!(first["material"]["n"], 10);
    assert_eq!(first["material"]["alpha"], 1);
    assert_eq!(first["material"]["shaderType"], 3);
    assert_eq!(first["diffuseTexture"], "DefaultMaterial_albedo.jpg");
    assert_eq!(first["normalTexture"], "DefaultMaterial_normal.png");
}

#[test]
fn every_object_is_named_by_position() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _) = write_seeded(dir.path(), 5);

    let records = output::load_field(&path).unwrap();
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.index(), Some(i));
        assert!(record.is_uniformly_scaled());
        assert_eq!(record.material, MaterialDescriptor::default());
    }
}

#[test]
fn same_seed_writes_identical_bytes() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let (first_path, _) = write_seeded(first.path(), 1234);
    let (second_path, _) = write_seeded(second.path(), 1234);

    assert_eq!(
        std::fs::read(first_path).unwrap(),
        std::fs::read(second_path).unwrap()
    );
}

#[test]
fn rerun_overwrites_previous_field() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _) = write_seeded(dir.path(), 1);
    let (_, document) = write_seeded(dir.path(), 2);

    assert_eq!(std::fs::read_to_string(path).unwrap(), document);
}
