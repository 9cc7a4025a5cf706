use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing djsetcalc…");

    Config::init_all(cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 djsetcalc initialization completed!");
    Ok(())
}
