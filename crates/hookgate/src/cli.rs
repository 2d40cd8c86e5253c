use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Flag or env value where a blank string means "not set", so `PORT=` behaves
/// like an absent `PORT`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeEmpty<T>(pub Option<T>);

impl<T> FromStr for MaybeEmpty<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self(None));
        }
        s.parse::<T>()
            .map(|value| Self(Some(value)))
            .map_err(|e| e.to_string())
    }
}

fn given<T: Clone>(arg: &Option<MaybeEmpty<T>>) -> Option<T> {
    arg.as_ref().and_then(|v| v.0.clone())
}

/// Overrides for the `[server]` and `[hooks]` config sections
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "HOOKGATE_HOST", global = true)]
    pub host: Option<MaybeEmpty<String>>,

    /// Port to listen on
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<MaybeEmpty<u16>>,

    /// Largest request body accepted by /before and /after
    #[arg(long, env = "HOOKGATE_MAX_BODY_BYTES", global = true)]
    pub max_body_bytes: Option<MaybeEmpty<usize>>,

    /// Add interception timestamps and result counts to payloads (true/false)
    #[arg(long, env = "HOOKGATE_ENRICH", global = true)]
    pub enrich: Option<MaybeEmpty<bool>>,
}

impl ServeArgs {
    pub fn host(&self) -> Option<String> {
        given(&self.host)
    }

    pub fn port(&self) -> Option<u16> {
        given(&self.port)
    }

    pub fn max_body_bytes(&self) -> Option<usize> {
        given(&self.max_body_bytes)
    }

    pub fn enrich(&self) -> Option<bool> {
        given(&self.enrich)
    }
}

#[derive(Parser)]
#[command(name = "hookgate")]
#[command(about = "hookgate - HTTP interceptor for tool-call payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new config file
    Init {
        /// Path for new config file
        #[arg(default_value = "hookgate.toml")]
        path: PathBuf,
    },
    /// Start the interceptor server (default when no command is given)
    Serve,
}
