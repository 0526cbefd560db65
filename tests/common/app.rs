use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use difficulty_backend::config::Config;
use difficulty_backend::routes::build_router;
use difficulty_backend::state::AppState;
use difficulty_backend::store::Store;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub storage_path: PathBuf,
    _temp_dir: TempDir,
}

pub fn spawn_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let storage_path = temp_dir.path().join("history.json");

    // Construct Config directly instead of via set_var: env mutation races
    // across parallel test threads.
    let config = Config {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        port: 5001,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        storage_path: storage_path.to_string_lossy().to_string(),
        cors_origin: "*".to_string(),
    };

    let store = Arc::new(Store::open(&storage_path));
    let state = AppState::new(store, &config);
    let app = build_router(state.clone());

    TestApp {
        app,
        state,
        storage_path,
        _temp_dir: temp_dir,
    }
}
