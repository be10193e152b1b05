//! Demonstration binary: exercises the store end to end.
//!
//! Runs a fixed sequence against a fresh store, saves it, reloads it and
//! prints the resulting report. Persistence failures are logged and skipped;
//! the demo never aborts over them.

use anyhow::Result;

use stockroom_core::ItemName;
use stockroom_inventory::InventoryStore;
use stockroom_persistence::{load, save};

fn main() -> Result<()> {
    stockroom_observability::init();

    let path =
        std::env::var("STOCKROOM_FILE").unwrap_or_else(|_| "inventory.json".to_string());

    let mut store = InventoryStore::new();

    let apple = ItemName::new("apple")?;
    let banana = ItemName::new("banana")?;
    let orange = ItemName::new("orange")?;

    store.add(&apple, 10);
    store.add(&banana, 5);

    if let Err(err) = store.remove(&apple, 3) {
        tracing::warn!(error = %err, "demo removal failed");
    }
    // Expected to fail: orange was never stocked. The store logs the warning.
    let _ = store.remove(&orange, 1);

    println!("Apple stock: {}", store.get_qty(&apple));

    let low: Vec<String> = store.check_low(5).iter().map(ToString::to_string).collect();
    println!("Low items: {low:?}");

    if let Err(err) = save(&store, &path) {
        tracing::error!(error = %err, "demo save failed, continuing");
    }
    if let Err(err) = load(&mut store, &path) {
        tracing::error!(error = %err, "demo reload failed, continuing");
    }

    print!("{}", store.render_report());

    Ok(())
}
