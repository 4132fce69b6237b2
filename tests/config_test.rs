use quickfind::QuickfindConfig;
use std::path::PathBuf;

#[test]
fn defaults_cover_the_usual_ignore_suspects() {
    let config = QuickfindConfig::default();
    let ignore = config.ignore_set();
    for name in [".git", "node_modules", "dist", "build", "__pycache__", "vendor"] {
        assert!(ignore.contains(name), "missing {name}");
    }
}

#[test]
fn default_acceptance_ratios_are_strict_for_names_and_lenient_for_paths() {
    let config = QuickfindConfig::default();
    assert!(config.matching.name_accept_ratio > config.matching.path_accept_ratio);
    assert!((config.matching.name_accept_ratio - 0.9).abs() < f64::EPSILON);
    assert!((config.matching.path_accept_ratio - 0.6).abs() < f64::EPSILON);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let config: QuickfindConfig =
        toml::from_str("max_file_results = 7\n[matching]\nrun_bonus = 21\n").unwrap();
    assert_eq!(config.max_file_results, 7);
    assert_eq!(config.matching.run_bonus, 21);
    // Untouched fields fall back to defaults.
    assert_eq!(config.max_app_results, 8);
    assert!(config.ignore_set().contains(".git"));
}

#[test]
fn explicit_roots_win_over_the_launcher_list() {
    let config = QuickfindConfig {
        roots: vec![PathBuf::from("/proj")],
        ..QuickfindConfig::default()
    };
    assert_eq!(config.effective_roots(), vec![PathBuf::from("/proj")]);
}
