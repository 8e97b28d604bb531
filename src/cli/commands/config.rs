use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config: true } = cmd {
        info(format!(
            "Current configuration ({}):\n",
            Config::config_file().display()
        ));
        println!("{}", serde_yaml::to_string(cfg)?);
    }
    Ok(())
}
