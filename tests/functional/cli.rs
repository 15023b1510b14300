use {
    crate::utils::{TEST_INFURA_KEY, TEST_PRIVATE_KEY},
    assert_cmd::Command,
    predicates::prelude::*,
};

fn deploy_config() -> Command {
    let mut cmd = Command::cargo_bin("deploy-config").unwrap();
    cmd.env_clear();
    cmd
}

fn deploy_config_with_secrets() -> Command {
    let mut cmd = deploy_config();
    cmd.env("INFURA_API_KEY", TEST_INFURA_KEY)
        .env("PRIVATE_KEY", TEST_PRIVATE_KEY);
    cmd
}

#[test]
fn prints_the_config_on_stdout() {
    deploy_config_with_secrets()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "https://goerli.infura.io/v3/{TEST_INFURA_KEY}"
        )));
}

#[test]
fn missing_secret_exits_nonzero_naming_the_variable() {
    deploy_config()
        .env("PRIVATE_KEY", TEST_PRIVATE_KEY)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("INFURA_API_KEY"));
}

#[test]
fn reads_a_dotenv_file_from_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        format!("INFURA_API_KEY={TEST_INFURA_KEY}\nPRIVATE_KEY={TEST_PRIVATE_KEY}\n"),
    )
    .unwrap();

    deploy_config()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("goerli.infura.io"));
}

#[test]
fn explicit_env_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("deploy.env");
    std::fs::write(
        &env_file,
        format!("INFURA_API_KEY={TEST_INFURA_KEY}\nPRIVATE_KEY={TEST_PRIVATE_KEY}\n"),
    )
    .unwrap();

    deploy_config()
        .env("DEPLOY_CONFIG_ENV_FILE", &env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("goerli.infura.io"));
}

#[test]
fn missing_explicit_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    deploy_config_with_secrets()
        .env("DEPLOY_CONFIG_ENV_FILE", dir.path().join("absent.env"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("env file"));
}

#[test]
fn writes_the_config_to_the_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("config.json");

    deploy_config_with_secrets()
        .env("DEPLOY_CONFIG_OUTPUT", &output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(value["networks"]["goerli"]["url"]
        .as_str()
        .unwrap()
        .contains(TEST_INFURA_KEY));
}

#[test]
fn duplicate_selection_exits_nonzero() {
    deploy_config_with_secrets()
        .env("DEPLOY_CONFIG_NETWORKS", "goerli,goerli")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate network name: goerli"));
}
