use anyhow::Context;

use lootpack_shell::{Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("failed to read lootpack configuration")?;
    lootpack_observability::init(config.log_format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run().context("backpack session aborted")?;

    Ok(())
}
