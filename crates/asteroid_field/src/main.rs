//! Writes a freshly generated asteroid field to `asteroids.json`

use asteroid_field::foundation::logging;
use asteroid_field::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run() -> Result<(), FieldError> {
    let config = FieldConfig::default();
    let generator = FieldGenerator::new(config)?;

    let mut rng = StdRng::from_entropy();
    let records = generator.generate(&mut rng);

    let document = output::write_field(&generator.config().output_path, &records)?;
    logging::debug!("{document}");

    Ok(())
}

fn main() {
    logging::init();

    logging::info!("Spawning asteroid field");
    if let Err(e) = run() {
        logging::error!("Asteroid field generation failed: {e}");
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
