use anyhow::Result;
use colored::Colorize;

use crate::content::ContentStore;
use crate::output;
use crate::store::Home;

pub fn order(home: &Home, order_id: u64) -> Result<()> {
    let ledger = home.load_ledger()?;
    let order = ledger.get_order(order_id)?;

    // metadata is only readable back from the local store
    let store = ContentStore::from_config(home, &home.load_config()?);
    let metadata = match &order.content_pointer {
        Some(pointer) => store.get_local(pointer)?,
        None => None,
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "order": order,
            "metadata": metadata,
        }))?;
    } else {
        output::order(order);
        if let Some(metadata) = metadata {
            output::label("metadata", &metadata.to_string());
        }
    }
    Ok(())
}

pub fn list(home: &Home) -> Result<()> {
    let ledger = home.load_ledger()?;

    if output::is_json() {
        let orders: Vec<_> = ledger.orders().collect();
        return output::json_output(serde_json::json!({
            "order_count": ledger.order_count(),
            "orders": orders,
        }));
    }

    if ledger.order_count() == 0 {
        output::info("no orders yet");
        return Ok(());
    }
    for order in ledger.orders() {
        let pointer = if order.content_pointer.is_some() { "" } else { " (no pointer)" };
        eprintln!(
            "{:>4}  {:<10}  {:<20} x{:<4} {:>8}  {}{}",
            format!("#{}", order.id).bold(),
            output::status(order.status),
            order.product,
            order.quantity,
            order.total_cost,
            order.customer.as_str(),
            pointer.dimmed(),
        );
    }
    Ok(())
}

pub fn events(home: &Home) -> Result<()> {
    let ledger = home.load_ledger()?;
    if output::is_json() {
        return output::json_output(serde_json::json!({ "events": ledger.events() }));
    }
    if ledger.events().is_empty() {
        output::info("no events yet");
    }
    output::events(ledger.events());
    Ok(())
}
