use anyhow::anyhow;
use clap::Args;
use escola::SchoolConfig;
use std::io::Write;

/// Arguments for the Reset command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[clap(long, short = 'y')]
    pub yes: bool,
}

fn confirm(path: &str) -> anyhow::Result<bool> {
    print!(
        "This deletes every course, student and enrollment in {}. Continue? [y/N] ",
        path
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn run(config: &SchoolConfig, args: ResetArgs) -> anyhow::Result<()> {
    let ResetArgs { yes } = args;

    let sqlite_path = config.sqlite_path();
    if !yes && !confirm(&sqlite_path)? {
        println!("Aborted.");
        return Ok(());
    }

    let directory = super::open_directory(config)?;
    directory
        .reset()
        .map_err(|e| anyhow!("Failed to reset {}: {}", sqlite_path, e))?;

    println!("All data removed from {}", sqlite_path);
    Ok(())
}
