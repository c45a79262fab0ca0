use anyhow::Result;
use triad_advisor::analyze;
use triad_catalog::Catalog;

const DEFAULT_CATALOG: &str = "data/creatures.json";

fn main() -> Result<()> {
    let catalog_path =
        std::env::var("TRIAD_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.to_string());
    let names: Vec<String> = std::env::args().skip(1).collect();

    if names.is_empty() {
        eprintln!("usage: team_advisor <name> [name] [name]");
        eprintln!("names match canonical or localized creature names, case-insensitive");
        std::process::exit(2);
    }

    println!("Loading catalog from {catalog_path}...");
    let catalog = Catalog::load(&catalog_path)?;
    println!("Loaded {} creatures", catalog.len());

    let report = analyze(&catalog, &names)?;

    if !report.unmatched.is_empty() {
        println!("Not found: {}", report.unmatched.join(", "));
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
