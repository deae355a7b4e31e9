use anyhow::Result;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zko_verifier::VerificationKey;

use crate::output;
use crate::store::Home;

pub fn run(home: &Home, seed: Option<u64>) -> Result<()> {
    if home.vk_path().exists() {
        return Err(output::fail_with_hint(
            "verification key already installed",
            &format!("remove {} to start a fresh deployment", home.root().display()),
        ));
    }

    let mut config = home.load_config()?;
    let seed = seed.unwrap_or(config.seed);

    // Deterministic setup, same seed gives the same keys
    let sp = output::spinner("setting up circuit...");
    let mut rng = StdRng::seed_from_u64(seed);
    let (pk, vk) = zko_circuit::setup(&mut rng)
        .map_err(|e| anyhow::anyhow!("circuit setup failed: {e}"))?;
    let constraints = zko_circuit::constraint_count()
        .map_err(|e| anyhow::anyhow!("constraint synthesis failed: {e}"))?;
    sp.finish_and_clear();

    let vk = VerificationKey::try_from(&vk)?;
    // the ledger must accept the key before anything is written
    let ledger = home.load_ledger()?;
    ledger.load_verification_key(vk.clone())?;

    home.save_pk(&pk)?;
    home.save_vk(&vk)?;
    config.seed = seed;
    home.save_config(&config)?;
    tracing::info!(seed, constraints, "deployment initialized");

    if output::is_json() {
        output::json_output(serde_json::json!({
            "seed": seed,
            "constraints": constraints,
            "public_inputs": vk.num_public_inputs(),
            "vk": home.vk_path(),
        }))?;
    } else {
        output::success("verification key installed");
        output::label("seed", &seed.to_string());
        output::label("constraints", &constraints.to_string());
        output::label("public_inputs", &vk.num_public_inputs().to_string());
        output::label("home", &home.root().display().to_string());
    }
    Ok(())
}
