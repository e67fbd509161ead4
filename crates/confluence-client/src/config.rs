//! Client configuration.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Connection settings for one Confluence site.
///
/// `site` is the API hostname; `public_site` is the hostname used when
/// composing user-facing URLs (it defaults to `site`). Cloud sites
/// (`*.atlassian.net`) serve the API under the `/wiki` context, which is
/// filled in automatically when no context is given.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub site: String,
    pub site_tls: bool,
    pub public_site: String,
    pub public_site_tls: bool,
    pub context: String,
    pub username: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    auth: AuthSection,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default)]
    host: String,
    #[serde(default = "default_tls")]
    tls: bool,
    #[serde(default)]
    public_host: Option<String>,
    #[serde(default)]
    public_tls: Option<bool>,
    #[serde(default)]
    context: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            host: String::new(),
            tls: default_tls(),
            public_host: None,
            public_tls: None,
            context: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthSection {
    #[serde(default = "default_username")]
    user: String,
    #[serde(default = "default_token")]
    token: String,
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            user: default_username(),
            token: default_token(),
        }
    }
}

fn default_tls() -> bool {
    true
}

fn default_username() -> String {
    "user".to_string()
}

fn default_token() -> String {
    "password".to_string()
}

fn default_context(site: &str, context: Option<String>) -> String {
    match context {
        Some(context) if !context.is_empty() => context,
        // Cloud sites serve the API under /wiki.
        _ if site.ends_with(".atlassian.net") => "/wiki".to_string(),
        _ => String::new(),
    }
}

impl ClientConfig {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let site = site.into();
        let context = default_context(&site, None);
        Self {
            public_site: site.clone(),
            site,
            site_tls: true,
            public_site_tls: true,
            context,
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.site_tls = tls;
        self.public_site_tls = tls;
        self
    }

    pub fn with_public_site(mut self, public_site: impl Into<String>, tls: bool) -> Self {
        self.public_site = public_site.into();
        self.public_site_tls = tls;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Load from a TOML file (`CONFLUENCE_CONFIG`, else `./confluence.toml`),
    /// falling back to `CONFLUENCE_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        if let Some(file_config) = load_from_file()? {
            let site = file_config.site.host;
            let tls = file_config.site.tls;
            return Ok(Self {
                public_site: file_config.site.public_host.unwrap_or_else(|| site.clone()),
                public_site_tls: file_config.site.public_tls.unwrap_or(tls),
                context: default_context(&site, file_config.site.context),
                site,
                site_tls: tls,
                username: file_config.auth.user,
                token: file_config.auth.token,
            });
        }

        Ok(Self::from_env())
    }

    fn from_env() -> Self {
        let site = env::var("CONFLUENCE_SITE").unwrap_or_default();
        let site_tls = env::var("CONFLUENCE_SITE_TLS")
            .ok()
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or_else(default_tls);
        let public_site = env::var("CONFLUENCE_PUBLIC_SITE")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| site.clone());
        let public_site_tls = env::var("CONFLUENCE_PUBLIC_SITE_TLS")
            .ok()
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(site_tls);
        let context = default_context(&site, env::var("CONFLUENCE_CONTEXT").ok());
        let username = env::var("CONFLUENCE_USER").unwrap_or_else(|_| default_username());
        let token = env::var("CONFLUENCE_TOKEN").unwrap_or_else(|_| default_token());

        Self {
            site,
            site_tls,
            public_site,
            public_site_tls,
            context,
            username,
            token,
        }
    }

    /// Base URL for API calls, without a trailing slash.
    pub fn base_url(&self) -> String {
        compose_url(&self.site, self.site_tls, &self.context)
    }

    /// Base URL for user-facing links, without a trailing slash.
    pub fn public_base_url(&self) -> String {
        compose_url(&self.public_site, self.public_site_tls, &self.context)
    }
}

fn compose_url(host: &str, tls: bool, context: &str) -> String {
    let scheme = if tls { "https" } else { "http" };
    format!("{scheme}://{host}{context}")
}

fn load_from_file() -> anyhow::Result<Option<FileConfig>> {
    let config_path = env::var("CONFLUENCE_CONFIG").ok();
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new("confluence.toml").exists() {
        Some("confluence.toml".to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}
