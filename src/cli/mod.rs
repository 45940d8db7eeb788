//! CLI argument parsing for emailgen.
//!
//! Uses clap derive macros for declarative argument definitions. All three
//! inputs are optional on the command line; whatever is missing is prompted
//! for interactively by the command layer.

use clap::Parser;

/// Emailgen: build an email address from a name and a format template.
///
/// Placeholders go in square brackets: `[first]`, `[middle]`, `[last]`,
/// optionally with a truncation modifier such as `[first_initial]` or
/// `[last_three]`. Literal text between placeholders becomes the separator,
/// and the domain is appended to the result exactly as given.
#[derive(Parser, Debug)]
#[command(name = "emailgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Full name, e.g. "John Doe" or "John Michael Doe". Prompted for if omitted.
    pub name: Option<String>,

    /// Format template, e.g. "[first_initial].[last]". Prompted for if omitted.
    pub format: Option<String>,

    /// Domain appended verbatim, e.g. "@example.com". Prompted for if omitted.
    pub domain: Option<String>,

    /// Emit the result as a JSON record instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_all_positionals() {
        let cli = Cli::try_parse_from([
            "emailgen",
            "John Doe",
            "[first_initial].[last]",
            "@example.com",
        ])
        .unwrap();
        assert_eq!(cli.name.as_deref(), Some("John Doe"));
        assert_eq!(cli.format.as_deref(), Some("[first_initial].[last]"));
        assert_eq!(cli.domain.as_deref(), Some("@example.com"));
        assert!(!cli.json);
    }

    #[test]
    fn parse_without_arguments() {
        let cli = Cli::try_parse_from(["emailgen"]).unwrap();
        assert_eq!(cli.name, None);
        assert_eq!(cli.format, None);
        assert_eq!(cli.domain, None);
    }

    #[test]
    fn parse_partial_positionals() {
        let cli = Cli::try_parse_from(["emailgen", "John Doe"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("John Doe"));
        assert_eq!(cli.format, None);
        assert_eq!(cli.domain, None);
    }

    #[test]
    fn parse_json_flag() {
        let cli = Cli::try_parse_from([
            "emailgen",
            "John Doe",
            "[first][last]",
            "@example.com",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
    }
}
