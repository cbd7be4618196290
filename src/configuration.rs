use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Cli;

/// Runtime settings resolved once at startup and handed to the services.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub topics_path: PathBuf,
    pub skills_path: PathBuf,
    pub api_listen: SocketAddr,
    pub log_file: Option<PathBuf>,
}

impl Configuration {
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = PathBuf::from(&cli.data_dir);
        Self {
            topics_path: data_dir.join(&cli.topics_file),
            skills_path: data_dir.join(&cli.skills_file),
            data_dir,
            api_listen: cli.api_listen,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
        }
    }
}
