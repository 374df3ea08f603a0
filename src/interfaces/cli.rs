use clap::Parser;

/// Exit status after Ctrl-C (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "transchain")]
#[command(about = "Translate text with automatic fallback across free translation services.")]
#[command(version)]
pub struct Cli {
    /// Target language code (defaults to `target_language` from the config)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Source language code, or `auto`
    #[arg(short = 'f', long = "from", default_value = "auto")]
    pub from: String,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Per-provider timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// List supported languages
    #[arg(long)]
    pub languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_and_text() {
        let cli = Cli::parse_from(["transchain", "-t", "fr", "Hello,", "world!"]);
        assert_eq!(cli.to.as_deref(), Some("fr"));
        assert_eq!(cli.from, "auto");
        assert_eq!(cli.text.join(" "), "Hello, world!");
    }

    #[test]
    fn interrupt_exit_code_is_non_zero() {
        assert_eq!(EXIT_INTERRUPTED, 128 + 2);
        assert_ne!(EXIT_INTERRUPTED, 0);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["transchain", "--timeout", "0", "hi"]).is_err());
    }
}
