use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tomboy::config::ExportConfig;
use tomboy::error::Result;

/// Long flags that are also accepted with a single dash (`-in DIR`, `-revisions=false`).
const SINGLE_DASH_FLAGS: &[&str] = &["in", "out", "revisions", "paths", "config", "verbose"];

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tomboy-export", bin_name = "tomboy-export", version = get_version())]
#[command(about = "Convert a Tomboy note archive into readable text", long_about = None)]
pub struct Cli {
    /// Source path for Tomboy notes (the directory holding manifest.xml)
    #[arg(long = "in", value_name = "DIR")]
    pub in_path: Option<PathBuf>,

    /// Output path for converted notes (accepted, not used yet)
    #[arg(long = "out", value_name = "PATH")]
    pub out_path: Option<PathBuf>,

    /// Export all note revisions (accepted, not used yet)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub revisions: Option<bool>,

    /// Print the resolved note file paths instead of note contents
    #[arg(long)]
    pub paths: bool,

    /// Read defaults from a JSON config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the run configuration: the config file (if any) first, then any
    /// flag given on the command line on top.
    pub fn to_config(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };

        if let Some(in_path) = &self.in_path {
            config.in_path = in_path.clone();
        }
        if let Some(out_path) = &self.out_path {
            config.out_path = out_path.clone();
        }
        if let Some(revisions) = self.revisions {
            config.revisions = revisions;
        }
        if self.paths {
            config.list_paths = true;
        }
        Ok(config)
    }
}

/// Rewrites `-in`, `-out=...` and friends to their `--` form so clap can parse them.
/// Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let s = match arg.to_str() {
                Some(s) => s.to_owned(),
                None => return arg,
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            let single_dash = match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    SINGLE_DASH_FLAGS.contains(&name)
                }
                _ => false,
            };
            if single_dash {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}
