use clap::Parser;

/// git-auto-message: summarise git changes into a short deterministic commit message
#[derive(Parser, Debug)]
#[command(
    name = "git-auto-message",
    about,
    long_about = None,
    disable_version_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// describe staged changes only
    #[arg(long, conflicts_with = "unstaged")]
    pub staged: bool,

    /// describe unstaged changes only
    #[arg(long, conflicts_with = "staged")]
    pub unstaged: bool,

    /// list the collected files before the message
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// print a machine-readable JSON report instead of the bare message
    #[arg(long, conflicts_with = "list")]
    pub json: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
