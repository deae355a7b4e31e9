use anyhow::{Context, Result};

use zko_ledger::OrderRequest;
use zko_verifier::scalars_to_hex;

use crate::commands::parse_scalars;
use crate::content::ContentStore;
use crate::output;
use crate::store::Home;

pub struct PlaceArgs {
    pub product: String,
    pub quantity: u64,
    pub total_cost: u64,
    pub customer: String,
    pub inputs: Vec<String>,
}

/// Archive metadata, then create the order and attach the pointer as two
/// separately persisted transactions.
pub async fn run(home: &Home, principal: Option<&str>, args: PlaceArgs) -> Result<()> {
    let config = home.load_config()?;
    let caller = home.principal(principal)?;
    let public_inputs = parse_scalars(&args.inputs)?;

    let metadata = serde_json::json!({
        "product": args.product,
        "quantity": args.quantity,
        "total_cost": args.total_cost,
        "customer_name": args.customer,
        "customer": caller.as_str(),
        "public_inputs": scalars_to_hex(&public_inputs),
    });
    let store = ContentStore::from_config(home, &config);
    let sp = output::spinner(&format!("uploading metadata to {} store...", config.content_store));
    let pointer = store.put(&metadata).await;
    sp.finish_and_clear();
    let pointer = pointer.with_context(|| format!("{} content store failed", config.content_store))?;

    let mut ledger = home.load_ledger()?;
    let placed = ledger.create_order(
        &caller,
        OrderRequest {
            product: args.product,
            quantity: args.quantity,
            total_cost: args.total_cost,
            customer_name: args.customer,
            public_inputs,
        },
    )?;
    home.save_ledger(&ledger)?;
    let order_id = placed.value;
    output::events(&placed.events);

    let attached = ledger.attach_content_pointer(order_id, pointer.clone());
    match attached {
        Ok(receipt) => {
            home.save_ledger(&ledger)?;
            output::events(&receipt.events);
        }
        Err(e) => {
            output::warn(&format!("order #{order_id} placed but pointer not attached: {e}"));
            output::info(&format!("retry with `zko attach {order_id} {pointer}`"));
        }
    }

    if output::is_json() {
        output::json_output(serde_json::json!({
            "order_id": order_id,
            "content_pointer": pointer,
            "order": ledger.get_order(order_id)?,
        }))?;
    } else {
        output::success(&format!("order #{order_id} placed"));
        output::label("content_pointer", &pointer);
    }
    Ok(())
}

pub fn attach(home: &Home, order_id: u64, pointer: &str) -> Result<()> {
    let mut ledger = home.load_ledger()?;
    ledger.attach_content_pointer(order_id, pointer)?;
    home.save_ledger(&ledger)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "order_id": order_id,
            "content_pointer": pointer,
        }))?;
    } else {
        output::success(&format!("pointer attached to order #{order_id}"));
    }
    Ok(())
}
