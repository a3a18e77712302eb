//! Config files feed through to the reports.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use numlab_cli::{load_tolerances, run, Cli};

fn temp_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("numlab-{}-{name}.toml", std::process::id()));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn significance_level_from_config_changes_the_verdict() {
    let path = temp_config("alpha", "significance_level = 0.999999\n");
    let cli = Cli::try_parse_from([
        "numlab",
        "--config",
        path.to_str().unwrap(),
        "ttest",
        "--mean",
        "100",
        "--mu0",
        "100",
    ])
    .unwrap();

    let tolerances = load_tolerances(cli.config.as_deref()).unwrap();
    let mut out = Vec::new();
    run(&cli.command, &tolerances, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    fs::remove_file(&path).ok();

    assert!(text.contains("reject H0"), "{text}");
    assert!(!text.contains("cannot reject"), "{text}");
}

#[test]
fn invalid_config_is_reported() {
    let path = temp_config("bad", "integration_intervals = 0\n");
    let err = load_tolerances(Some(&path)).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(format!("{err:#}").contains("loading config file"));
}
