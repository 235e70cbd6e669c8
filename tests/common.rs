use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Town streets: A-B(2), A-C(4), B-C(1), C-D(3), D-E(1)
#[allow(dead_code)]
pub const TOWN: [&str; 5] = ["A:B:2", "A:C:4", "B:C:1", "C:D:3", "D:E:1"];

/// Get a Command for zonenet, isolated from any user config
pub fn zonenet() -> Command {
    let mut cmd = cargo_bin_cmd!("zonenet");
    cmd.env_remove("ZONENET_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("ZONENET_LOG")
        .env(
            "ZONENET_CONFIG_DIR",
            std::env::temp_dir().join("zonenet-tests-without-config"),
        );
    cmd
}

/// `--street` arguments for the town
#[allow(dead_code)]
pub fn town_args() -> Vec<String> {
    TOWN.iter()
        .flat_map(|street| ["--street".to_string(), street.to_string()])
        .collect()
}
