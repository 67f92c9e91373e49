use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serve the throwlhos status catalog
#[derive(Debug, Parser)]
#[command(name = "throwlhos", about = "HTTP error descriptors for every 3xx/4xx/5xx status")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "throwlhos.toml", env = "THROWLHOS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "THROWLHOS_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter used when the config file sets none
    #[arg(long, default_value = "info", env = "THROWLHOS_LOG")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["throwlhos"]).unwrap();
        assert_eq!(args.config, PathBuf::from("throwlhos.toml"));
        assert!(args.listen.is_none());
        assert_eq!(args.log_filter, "info");
    }

    #[test]
    fn overrides() {
        let args =
            Args::try_parse_from(["throwlhos", "-c", "/etc/throwlhos.toml", "--listen", "127.0.0.1:8080"]).unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/throwlhos.toml"));
        assert_eq!(args.listen, Some(SocketAddr::from(([127, 0, 0, 1], 8080))));
    }

    #[test]
    fn rejects_bad_listen_address() {
        assert!(Args::try_parse_from(["throwlhos", "--listen", "not-an-address"]).is_err());
    }
}
