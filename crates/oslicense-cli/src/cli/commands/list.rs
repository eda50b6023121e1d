//! `oslicense --list` – print all registry licenses with their IDs.

use anyhow::Result;
use oslicense_core::registry::RegistryClient;

pub fn run_list(client: &RegistryClient) -> Result<()> {
    let licenses = client.list_licenses()?;

    // Case-insensitive by ID; the map itself is ordered case-sensitively.
    let mut ids: Vec<&String> = licenses.keys().collect();
    ids.sort_by_key(|id| id.to_lowercase());

    println!("Available licenses:\n");
    for id in ids {
        println!("{id}:");
        println!("    {}", licenses[id]);
    }
    Ok(())
}
