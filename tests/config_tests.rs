use std::path::PathBuf;
use wardstore::config::Config;
use wardstore::utils::path::expand_tilde;

#[test]
fn default_config_points_at_the_standard_database_file() {
    let cfg = Config::default();
    assert!(cfg.database.ends_with("wardstore.sqlite"));
    assert_eq!(PathBuf::from(&cfg.database), Config::database_file());
}

#[test]
fn config_file_lives_in_the_config_dir() {
    assert_eq!(
        Config::config_file(),
        Config::config_dir().join("wardstore.conf")
    );
}

#[test]
fn expand_tilde_resolves_home_relative_paths() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/ward.sqlite"), home.join("ward.sqlite"));
        assert_eq!(expand_tilde("~"), home);
    }
    assert_eq!(
        expand_tilde("/tmp/ward.sqlite"),
        PathBuf::from("/tmp/ward.sqlite")
    );
}
