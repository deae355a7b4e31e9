use anyhow::Result;
use zko_ledger::{LedgerError, OrderStatus};

use crate::output;
use crate::store::Home;

pub fn run(home: &Home, principal: Option<&str>, order_id: u64, status: &str) -> Result<()> {
    let caller = home.principal(principal)?;
    let new_status: OrderStatus = status.parse()?;

    let mut ledger = home.load_ledger()?;
    let receipt = match ledger.update_status(&caller, order_id, new_status) {
        Ok(receipt) => receipt,
        Err(LedgerError::Unauthorized { order_id }) => {
            return Err(output::fail_with_hint(
                &format!("{caller} does not own order #{order_id}"),
                "pass --as <principal> to act as the customer who placed it",
            ))
        }
        Err(LedgerError::InvalidTransition { from, to: OrderStatus::Verified }) => {
            return Err(output::fail_with_hint(
                &format!("cannot move order #{order_id} from {from} to Verified"),
                &format!("run `zko prove {order_id} <witness>` then `zko verify {order_id}`"),
            ))
        }
        Err(e) => return Err(e.into()),
    };
    home.save_ledger(&ledger)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "order_id": order_id,
            "status": new_status,
            "events": receipt.events,
        }))?;
    } else {
        output::events(&receipt.events);
        output::success(&format!("order #{order_id} is now {new_status}"));
    }
    Ok(())
}
