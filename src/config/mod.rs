pub mod config;

pub use config::{
    config_path, get_api_token, get_api_version, load_config, load_config_from, resolve_api_token,
    save_config, save_config_to, Config,
};
