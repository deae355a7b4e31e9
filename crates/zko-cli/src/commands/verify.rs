use std::path::PathBuf;

use anyhow::{Context, Result};
use zko_ledger::LedgerError;
use zko_verifier::{Proof, ProofHex, VerifierError};

use crate::output;
use crate::store::{read_json, Home};

pub fn run(
    home: &Home,
    principal: Option<&str>,
    order_id: u64,
    proof_path: Option<PathBuf>,
) -> Result<()> {
    let caller = home.principal(principal)?;
    let path = proof_path.unwrap_or_else(|| home.proof_path(order_id));
    let proof_hex: ProofHex = read_json(&path)
        .with_context(|| format!("no proof for order #{order_id}, run `zko prove` first"))?;
    let proof = Proof::try_from(&proof_hex)
        .with_context(|| format!("malformed proof in {}", path.display()))?;

    let mut ledger = home.load_ledger()?;
    let sp = output::spinner("checking pairing equation...");
    let result = ledger.verify_order(&caller, order_id, &proof);
    sp.finish_and_clear();
    let receipt = match result {
        Ok(receipt) => receipt,
        Err(LedgerError::Keys(VerifierError::Uninitialized)) => {
            return Err(output::fail_with_hint(
                "no verification key installed",
                "run `zko init` first",
            ))
        }
        Err(e) => return Err(e.into()),
    };
    home.save_ledger(&ledger)?;

    let verified = receipt.value;
    let status = ledger.get_order(order_id)?.status;
    if output::is_json() {
        output::json_output(serde_json::json!({
            "order_id": order_id,
            "verified": verified,
            "status": status,
            "events": receipt.events,
        }))?;
    } else {
        output::events(&receipt.events);
        if verified {
            output::success(&format!("proof valid, order #{order_id} is {status}"));
        } else {
            output::warn(&format!("proof rejected, order #{order_id} stays {status}"));
        }
    }
    Ok(())
}
