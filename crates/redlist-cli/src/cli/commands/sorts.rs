//! `redlist sorts` – list sort orders.

use anyhow::Result;
use redlist_core::Sort;

pub fn run_sorts(out: &super::Output) -> Result<()> {
    if out.json {
        let names: Vec<&str> = Sort::ALL.iter().map(|s| s.name()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }
    println!("{:<15} {}", "NAME", "LABEL");
    for sort in Sort::ALL {
        println!("{:<15} {}", sort.name(), sort.label());
    }
    Ok(())
}
