//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use alumni_config::{AlumniConfig, BackendKind};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
data_dir = "/var/lib/alumni"
backend = "memory"
"#,
        )?;

        let config: AlumniConfig = Figment::from(Serialized::defaults(AlumniConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.data_dir, "/var/lib/alumni");
        assert_eq!(config.storage.backend, BackendKind::Memory);
        Ok(())
    });
}

#[test]
fn loads_avatar_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[avatar]
base_url = "https://img.example/?text="
update_initials = 2
empty_name_initials = "??"
"#,
        )?;

        let config: AlumniConfig = Figment::from(Serialized::defaults(AlumniConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let style = config.avatar.style();
        assert_eq!(style.base_url, "https://img.example/?text=");
        assert_eq!(style.fallback_url, "https://img.example/?text=No+Photo");
        assert_eq!(style.registration_initials, 2);
        assert_eq!(style.update_initials, 2);
        assert_eq!(style.empty_name_initials, "??");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".alumni")?;
        jail.create_file(
            ".alumni/config.toml",
            r"
[general]
default_limit = 5
",
        )?;

        let config = AlumniConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
default_limit = 10
",
        )?;

        let config: AlumniConfig = Figment::from(Serialized::defaults(AlumniConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.storage.backend, BackendKind::File);
        assert_eq!(config.avatar.update_initials, 3);
        Ok(())
    });
}

#[test]
fn invalid_backend_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
backend = "redis"
"#,
        )?;

        let result: Result<AlumniConfig, _> =
            Figment::from(Serialized::defaults(AlumniConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
