/// Inventory adapters reading installed-package metadata
mod json_inventory_reader;

pub use json_inventory_reader::{JsonInventoryReader, INVENTORY_FILENAME};
