pub mod click_outside;
pub mod icons;
pub mod list_utils;

/// Ключ localStorage с TOML-переопределением конфигурации
pub const CONFIG_STORAGE_KEY: &str = "task_table_config";

/// Read the config override document, if the browser has one stored
pub fn config_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}
