//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for dual-ai
#[derive(Parser, Debug)]
#[command(name = "dual-ai")]
#[command(author, version, about = "Ask ChatGPT and Gemini the same prompt, side by side")]
#[command(long_about = r#"
dual-ai serves one HTTP endpoint that sends a prompt to ChatGPT and Gemini
at the same time and returns both replies together.

  POST /api/dual-ai   {"prompt": "..."}  ->  {"chatgptReply": ..., "geminiReply": ...}
  GET  /health

Provider keys are read from OPENAI_API_KEY and GOOGLE_API_KEY. Audit rows go
to Supabase when SUPABASE_URL (or NEXT_PUBLIC_SUPABASE_URL) and
SUPABASE_SERVICE_ROLE_KEY are set.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./dual-ai.toml      Project-level config
3. ~/.config/dual-ai/config.toml   Global config

Example:
  dual-ai --bind 0.0.0.0:8080 -v
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (default = info, -v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
