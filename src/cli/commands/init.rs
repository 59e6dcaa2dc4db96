use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Creates the config directory and file if missing. An existing file is
/// kept; fields it lacks are filled with their defaults.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    info("Initializing rAttendance…");
    let cfg = Config::init_all(&path)?;

    println!("📄 Config file : {}", path.display());
    println!("🌐 Service     : {}", cfg.generate_url());
    println!("📁 Output dir  : {}", cfg.output_dir);

    success("rAttendance initialization completed!");
    Ok(())
}
