use std::process::Command;

const CREDENTIAL_VARS: [&str; 6] = [
    "OKX_API_KEY",
    "OKX_SECRET_KEY",
    "OKX_PASSPHRASE",
    "api_key",
    "secret_key",
    "passphrase",
];

fn okx_rest() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_okx-rest"));
    command.current_dir(std::env::temp_dir()).env("RUST_LOG", "error");
    for var in CREDENTIAL_VARS {
        command.env_remove(var);
    }
    command
}

#[test]
fn cli_help_lists_commands() {
    let output = okx_rest()
        .arg("--help")
        .output()
        .expect("Failed to start okx-rest binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["balance", "market", "order", "transfer"] {
        assert!(stdout.contains(command), "missing {command} in help:\n{stdout}");
    }
}

#[test]
fn cli_missing_config_file_fails() {
    let output = okx_rest()
        .arg("--config")
        .arg("/nonexistent/okx.yaml")
        .arg("balance")
        .output()
        .expect("Failed to start okx-rest binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load config"), "stderr: {stderr}");
}

#[test]
fn cli_missing_credentials_fails_before_network() {
    let output = okx_rest()
        .arg("balance")
        .output()
        .expect("Failed to start okx-rest binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OKX_API_KEY"), "stderr: {stderr}");
}
