use serde::Deserialize;

/// Настройки панели администратора
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_page_window_radius")]
    pub page_window_radius: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToastConfig {
    #[serde(default = "default_toast_ms")]
    pub duration_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub accounts: Vec<StaffAccount>,
}

/// Учётная запись сотрудника для локального входа
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StaffAccount {
    pub email: String,
    pub password: String,
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

fn default_page_window_radius() -> usize {
    2
}

fn default_toast_ms() -> u32 {
    3000
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            page_window_radius: default_page_window_radius(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_ms(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[table]
page_size = 10
page_size_options = [10, 25, 50, 100]
page_window_radius = 2

[toast]
duration_ms = 3000

[[auth.accounts]]
email = "admin@example.com"
password = "change-me"
"#;

/// Parse a `config.toml` document and normalise out-of-range values.
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let mut config: DashboardConfig = toml::from_str(contents)?;
    config.normalize();
    Ok(config)
}

impl DashboardConfig {
    /// The embedded default; always valid.
    pub fn embedded() -> Self {
        parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            api: ApiConfig::default(),
            table: TableConfig::default(),
            toast: ToastConfig::default(),
            auth: AuthConfig::default(),
        })
    }

    fn normalize(&mut self) {
        self.table.page_size = self.table.page_size.max(1);
        self.table.page_size_options.retain(|size| *size > 0);
        if !self.table.page_size_options.contains(&self.table.page_size) {
            self.table.page_size_options.push(self.table.page_size);
        }
        self.table.page_size_options.sort_unstable();
        self.table.page_size_options.dedup();
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.toast.duration_ms, 3000);
        assert_eq!(config.auth.accounts.len(), 1);
        assert_eq!(config, DashboardConfig::embedded());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.table.page_size, 10);
        assert!(config.auth.accounts.is_empty());
    }

    #[test]
    fn test_page_size_is_normalised() {
        let config = parse_config("[table]\npage_size = 0\npage_size_options = [0, 50, 20]\n").unwrap();
        assert_eq!(config.table.page_size, 1);
        assert_eq!(config.table.page_size_options, vec![1, 20, 50]);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[table\npage_size = 10").is_err());
    }
}
