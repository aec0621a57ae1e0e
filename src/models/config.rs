//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// Prefix prepended to absolute links when served from a sub-path.
    #[serde(default)]
    pub app_sub_url: String,
    /// Cookie remembering the last signed-in user name.
    #[serde(default = "default_cookie_username")]
    pub cookie_username: String,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Presentation settings for the explore pages.
pub struct UiConfig {
    #[serde(default = "default_explore_paging_num")]
    pub explore_paging_num: usize,
    #[serde(default = "default_true")]
    pub show_user_email: bool,
    /// Let user keyword search match e-mail addresses too.
    #[serde(default)]
    pub search_by_email: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Account lifecycle settings.
pub struct ServiceConfig {
    /// Accounts must confirm their e-mail before using the dashboard.
    #[serde(default)]
    pub register_email_confirm: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            explore_paging_num: default_explore_paging_num(),
            show_user_email: true,
            search_by_email: false,
        }
    }
}

fn default_explore_paging_num() -> usize {
    20
}

fn default_true() -> bool {
    true
}

fn default_cookie_username() -> String {
    "remember_username".to_string()
}
