use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve topics and skills from JSON collection files",
    long_about = "A small REST service storing topics and skills as whole JSON arrays on disk.\n\nEnvironment:\n  DOTENV_PATH           .env file to load before parsing (default .env)\n  RUST_LOG              log filter (default info)\n"
)]
pub struct Cli {
    #[arg(
        long,
        env = "SKILLSVC_DATA_DIR",
        default_value = "data",
        value_name = "DIR",
        help = "Directory holding the collection files"
    )]
    pub data_dir: String,

    #[arg(
        long,
        env = "SKILLSVC_TOPICS_FILE",
        default_value = "topics.json",
        value_name = "FILE",
        help = "Topics collection file, relative to the data directory"
    )]
    pub topics_file: String,

    #[arg(
        long,
        env = "SKILLSVC_SKILLS_FILE",
        default_value = "skills.json",
        value_name = "FILE",
        help = "Skills collection file, relative to the data directory"
    )]
    pub skills_file: String,

    #[arg(
        long = "log-file",
        env = "SKILLSVC_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "api-listen",
        env = "SKILLSVC_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:5000",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["skillsvc"]).unwrap();
        assert_eq!(cli.topics_file, "topics.json");
        assert_eq!(cli.skills_file, "skills.json");
        assert_eq!(cli.api_listen.port(), 5000);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "skillsvc",
            "--data-dir",
            "/srv/skills",
            "--api-listen",
            "0.0.0.0:8080",
            "--log-file",
            "svc.log",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, "/srv/skills");
        assert_eq!(cli.api_listen.port(), 8080);
        assert_eq!(cli.log_file.as_deref(), Some("svc.log"));
    }
}
