use std::path::PathBuf;

use anyhow::Result;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zko_circuit::PublicInputs;
use zko_types::Scalar;
use zko_verifier::{scalars_to_hex, Proof, ProofHex};

use crate::output;
use crate::store::{write_json, Home};

fn proving_rng() -> StdRng {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

pub fn run(home: &Home, order_id: u64, witness: &str, out: Option<PathBuf>) -> Result<()> {
    let ledger = home.load_ledger()?;
    let order = ledger.get_order(order_id)?;
    let Some(inputs) = PublicInputs::from_scalars(&order.public_inputs) else {
        return Err(output::fail_with_hint(
            &format!("order #{order_id} does not carry [a, b, c, out] public inputs"),
            "place the order with --inputs a,b,c,out",
        ));
    };
    let root: Scalar = witness
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid witness {witness:?}: {e}"))?;
    let x = root.into_inner();
    if inputs.a * x * x + inputs.b * x + inputs.c != inputs.out {
        return Err(output::fail_with_hint(
            &format!("{witness} is not a root of order #{order_id}'s quadratic"),
            "the witness must satisfy a·x² + b·x + c = out",
        ));
    }

    let pk = home.load_pk().map_err(|e| {
        output::fail_with_hint(&format!("{e:#}"), "run `zko init` to generate keys")
    })?;

    let sp = output::spinner("generating proof...");
    let mut rng = proving_rng();
    let proved = zko_circuit::prove(&pk, inputs.a, inputs.b, inputs.c, x, &mut rng);
    sp.finish_and_clear();
    let (proof, _) = proved.map_err(|e| anyhow::anyhow!("proving failed: {e}"))?;

    let proof = ProofHex::from(&Proof::try_from(&proof)?);
    let path = out.unwrap_or_else(|| home.proof_path(order_id));
    write_json(&path, &proof)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "order_id": order_id,
            "proof": proof,
            "public_inputs": scalars_to_hex(&order.public_inputs),
            "path": path,
        }))?;
    } else {
        output::success(&format!("proof for order #{order_id} written"));
        output::label("path", &path.display().to_string());
        output::info(&format!("submit with `zko verify {order_id}`"));
    }
    Ok(())
}
