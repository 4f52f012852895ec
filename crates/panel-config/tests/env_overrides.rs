use figment::Jail;
use panel_config::PanelConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("PANEL_DATABASE__PATH", ":memory:");
        jail.set_env("PANEL_AUTH__EMAIL", "env@x.com");

        let config = PanelConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        assert_eq!(config.auth.email, "env@x.com");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".panel")?;
        jail.create_file(".panel/config.toml", "[auth]\nemail = \"toml@x.com\"\n")?;
        jail.set_env("PANEL_AUTH__EMAIL", "env@x.com");

        let config = PanelConfig::load().expect("config loads");
        assert_eq!(config.auth.email, "env@x.com");
        Ok(())
    });
}

#[test]
fn env_array_sets_status_allow_list() {
    Jail::expect_with(|jail| {
        jail.set_env("PANEL_STATUS__ALLOWED", "[scheduled,completed]");

        let config = PanelConfig::load().expect("config loads");
        assert_eq!(config.status.allowed, vec!["scheduled", "completed"]);
        let policy = config.status.policy();
        assert!(policy.check("completed").is_ok());
        assert!(policy.check("cancelled").is_err());
        Ok(())
    });
}

#[test]
fn env_sets_token_verification_secret() {
    Jail::expect_with(|jail| {
        jail.set_env("PANEL_AUTH__JWT_SECRET", "hmac-secret");

        let config = PanelConfig::load().expect("config loads");
        assert_eq!(config.auth.jwt_secret, "hmac-secret");
        assert!(config.auth.can_verify_tokens());
        assert!(!config.auth.is_configured());
        Ok(())
    });
}
