use lightning_list::core::cloud::APP_STATE_URL_ENV;
use lightning_list::is_running_in_cloud;
use serial_test::serial;

#[test]
#[serial]
fn test_is_running_locally() {
    std::env::remove_var(APP_STATE_URL_ENV);
    assert!(!is_running_in_cloud());
}

#[test]
#[serial]
fn test_is_running_cloud() {
    std::env::set_var(APP_STATE_URL_ENV, "127.0.0.1");
    let in_cloud = is_running_in_cloud();
    std::env::remove_var(APP_STATE_URL_ENV);

    assert!(in_cloud);
}
