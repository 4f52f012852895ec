use anyhow::Context;
use panel_config::PanelConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PanelConfig> {
    let mut config = PanelConfig::load_with_dotenv().context("failed to load panel config")?;
    apply_overrides(&mut config, flags);
    config.validate().context("invalid panel config")?;
    Ok(config)
}

fn apply_overrides(config: &mut PanelConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
            as_email: None,
        }
    }

    #[test]
    fn db_flag_overrides_configured_path() {
        let mut config = panel_config::PanelConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn no_db_flag_keeps_configured_path() {
        let mut config = panel_config::PanelConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, ".panel/panel.db");
    }
}
