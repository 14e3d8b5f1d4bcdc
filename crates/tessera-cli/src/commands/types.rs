//! Component type listing command

use super::load_factory;
use anyhow::Result;

pub fn run(types_path: &str) -> Result<()> {
    let factory = load_factory(types_path)?;

    if factory.is_empty() {
        println!("No component types in {}", types_path);
        return Ok(());
    }

    let mut types: Vec<_> = factory.types().collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));

    for component in types {
        println!("{}", component.name);
        if let Some(desc) = &component.description {
            println!("    # {}", desc);
        }
        if !component.aliases.is_empty() {
            let mut aliases = component.aliases.clone();
            aliases.sort();
            println!("    aliases: {}", aliases.join(", "));
        }
    }

    Ok(())
}
