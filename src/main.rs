use std::path::PathBuf;

use cd_inventory::Cli;

/// Default location of the persisted inventory snapshot.
const DATA_FILE: &str = "cd_inventory.dat";

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::new(PathBuf::from(DATA_FILE));
    cli.run()?;
    Ok(())
}
