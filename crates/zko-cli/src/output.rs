use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use zko_ledger::{LedgerEvent, Order, OrderStatus};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn warn(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.yellow());
    }
}

pub fn info(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg);
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

pub fn json_output(value: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}

pub fn status(status: OrderStatus) -> String {
    match status {
        OrderStatus::Pending => status.as_str().yellow().to_string(),
        OrderStatus::Verified => status.as_str().cyan().to_string(),
        OrderStatus::Completed => status.as_str().green().to_string(),
        OrderStatus::Rejected => status.as_str().red().to_string(),
    }
}

pub fn order(order: &Order) {
    label("id", &order.id.to_string());
    label("product", &order.product);
    label("quantity", &order.quantity.to_string());
    label("total_cost", &order.total_cost.to_string());
    label("status", &status(order.status));
    label("customer_name", &order.customer_name);
    label("customer", order.customer.as_str());
    let inputs: Vec<String> = order.public_inputs.iter().map(|s| s.to_hex()).collect();
    label("public_inputs", &inputs.join(", "));
    label(
        "content_pointer",
        order.content_pointer.as_deref().unwrap_or("(none)"),
    );
}

pub fn event(event: &LedgerEvent) {
    if is_json() {
        return;
    }
    let line = match event {
        LedgerEvent::OrderPlaced { order_id, product, quantity, .. } => {
            format!("OrderPlaced       #{order_id} {quantity} x {product}")
        }
        LedgerEvent::OrderStatusUpdated { order_id, new_status } => {
            format!("OrderStatusUpdated #{order_id} -> {}", status(*new_status))
        }
        LedgerEvent::OrderVerified { order_id, verified } => {
            let outcome = if *verified { "true".green() } else { "false".red() };
            format!("OrderVerified     #{order_id} verified={outcome}")
        }
    };
    eprintln!("  {} {}", "event".dimmed(), line);
}

pub fn events(events: &[LedgerEvent]) {
    for e in events {
        event(e);
    }
}
