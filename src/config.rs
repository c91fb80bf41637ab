//! Server Configuration
//!
//! Bind address and frontend location, resolved from CLI flags with
//! environment and built-in fallbacks.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4567;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Directory of static frontend files, if one is available.
    pub frontend_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Builds the configuration from process arguments.
    ///
    /// Supported flags: `--bind <addr:port>` and `--frontend <dir>`.
    /// Without `--bind`, the port comes from the `PORT` environment variable
    /// or defaults to 4567 on all interfaces. Without `--frontend`, a
    /// `frontend` directory next to the binary is used when it exists.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut bind: Option<SocketAddr> = None;
        let mut frontend: Option<PathBuf> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args.get(i + 1).context("--bind requires <addr:port>")?;
                    bind = Some(value.parse().context("invalid --bind address")?);
                    i += 2;
                }
                "--frontend" => {
                    let value = args.get(i + 1).context("--frontend requires a directory")?;
                    frontend = Some(PathBuf::from(value));
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = match bind {
            Some(addr) => addr,
            None => {
                let port = match std::env::var("PORT") {
                    Ok(raw) => raw.parse().context("invalid PORT environment variable")?,
                    Err(_) => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let frontend_dir = frontend.or_else(|| {
            let default = PathBuf::from("frontend");
            default.is_dir().then_some(default)
        });

        Ok(Self { bind, frontend_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bind_flag_is_parsed() {
        let config = ServerConfig::from_args(args(&["--bind", "127.0.0.1:8080"])).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        assert!(ServerConfig::from_args(args(&["--bind", "not-an-addr"])).is_err());
        assert!(ServerConfig::from_args(args(&["--bind"])).is_err());
    }

    #[test]
    fn test_frontend_flag_is_taken_verbatim() {
        let config = ServerConfig::from_args(args(&[
            "--bind",
            "127.0.0.1:8080",
            "--frontend",
            "/srv/frontend",
        ]))
        .unwrap();
        assert_eq!(config.frontend_dir, Some(PathBuf::from("/srv/frontend")));
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let config =
            ServerConfig::from_args(args(&["--verbose", "--bind", "127.0.0.1:9000"])).unwrap();
        assert_eq!(config.bind.port(), 9000);
    }
}
