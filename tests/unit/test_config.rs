use hydra_client::config::Config;
use hydra_client::constants::DEFAULT_REST_TIMEOUT;
use std::env;

#[test]
fn with_credentials_sets_all_fields() {
    let config = Config::with_credentials("https://node.example", "n1", "user", "pass");

    assert_eq!(config.rest_api.base_url, "https://node.example");
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
    assert_eq!(config.node_id, "n1");
    assert_eq!(config.credentials.username, "user");
    assert_eq!(config.credentials.password, "pass");
}

#[test]
fn new_reads_environment_variables() {
    unsafe {
        env::set_var("HYDRA_BASE_URL", "https://cp.example");
        env::set_var("HYDRA_NODE_ID", "node-7");
        env::set_var("HYDRA_USERNAME", "env_user");
        env::set_var("HYDRA_PASSWORD", "env_pass");
        env::set_var("HYDRA_REST_TIMEOUT", "5");
    }

    let config = Config::new();

    assert_eq!(config.rest_api.base_url, "https://cp.example");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.node_id, "node-7");
    assert_eq!(config.credentials.username, "env_user");
    assert_eq!(config.credentials.password, "env_pass");

    unsafe {
        env::remove_var("HYDRA_BASE_URL");
        env::remove_var("HYDRA_NODE_ID");
        env::remove_var("HYDRA_USERNAME");
        env::remove_var("HYDRA_PASSWORD");
        env::remove_var("HYDRA_REST_TIMEOUT");
    }
}
