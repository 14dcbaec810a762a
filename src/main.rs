use std::io;

use anyhow::{Context, Result};

use course_planner::{Config, Palette, Session};

fn main() -> Result<()> {
    let config = Config::from_args();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), Palette::new(config.color));

    session.greet().context("failed to write to the terminal")?;
    if let Some(path) = &config.catalog {
        session.load(path)
            .with_context(|| format!("failed to report on loading {}", path.display()))?;
    }
    session.menu_loop().context("lost the connection to the terminal")?;

    Ok(())
}
