//! Used for generating build information for the gas oracle.

use std::{env, error::Error, path::MAIN_SEPARATOR};
use vergen::{BuildBuilder, CargoBuilder, Emitter};

fn main() -> Result<(), Box<dyn Error>> {
    let mut emitter = Emitter::default();

    let build_builder = BuildBuilder::default().build_timestamp(true).build()?;

    // Add build timestamp information.
    emitter.add_instructions(&build_builder)?;

    let cargo_builder = CargoBuilder::default().features(true).target_triple(true).build()?;

    // Add cargo features and target information.
    emitter.add_instructions(&cargo_builder)?;

    emitter.emit_and_set()?;

    let out_dir = env::var("OUT_DIR")?;
    let profile = out_dir.rsplit(MAIN_SEPARATOR).nth(3).unwrap_or("unknown");
    println!("cargo:rustc-env=GAS_ORACLE_BUILD_PROFILE={profile}");

    Ok(())
}
