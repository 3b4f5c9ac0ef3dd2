use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Simulated latency before a job search answers.
    pub search_delay: Duration,
    /// Signed-in demo user; `None` starts the fitness tracker signed out.
    pub user_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            search_delay: Duration::from_millis(1000),
            user_email: Some("athlete@jobfit.dev".to_string()),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(addr) = lookup("JOBFIT_LISTEN_ADDR") {
            config.listen_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("invalid JOBFIT_LISTEN_ADDR {addr:?}"))?;
        }
        if let Some(dir) = lookup("JOBFIT_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(delay) = lookup("JOBFIT_SEARCH_DELAY_MS") {
            let millis: u64 = delay
                .trim()
                .parse()
                .with_context(|| format!("invalid JOBFIT_SEARCH_DELAY_MS {delay:?}"))?;
            config.search_delay = Duration::from_millis(millis);
        }
        if let Some(email) = lookup("JOBFIT_USER_EMAIL") {
            let email = email.trim();
            config.user_email = (!email.is_empty()).then(|| email.to_string());
        }
        Ok(config)
    }
}
