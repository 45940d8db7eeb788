//! Command implementation for emailgen.
//!
//! Resolves any missing inputs by prompting on stdin, runs the generator,
//! and prints the resulting address in plain or JSON form.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::cli::Cli;
use crate::error::{EmailError, Result};
use crate::generate::generate_email;

/// JSON output record for a generated address.
#[derive(Debug, Serialize)]
struct GeneratedEmail<'a> {
    name: &'a str,
    format: &'a str,
    domain: &'a str,
    email: &'a str,
}

/// Run the generate command.
///
/// Inputs omitted on the command line are prompted for interactively. An
/// absent generation result (unsplittable name, unresolvable format) becomes
/// a user error; a format demanding a missing middle name propagates as is.
pub fn cmd_generate(cli: Cli) -> Result<()> {
    let name = resolve_input(cli.name, "Enter Name: ")?;
    let format = resolve_input(cli.format, "Enter Email Format: ")?;
    let domain = resolve_input(cli.domain, "Enter required domain: ")?;

    match generate_email(&name, &format, &domain)? {
        Some(email) => {
            if cli.json {
                let record = GeneratedEmail {
                    name: &name,
                    format: &format,
                    domain: &domain,
                    email: &email,
                };
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("Resulting Email Address: {}", email);
            }
            Ok(())
        }
        None => Err(EmailError::UserError(
            "no email address could be generated for the given inputs".to_string(),
        )),
    }
}

/// Use the supplied argument, or prompt for a value on stdin.
fn resolve_input(arg: Option<String>, prompt: &str) -> Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => {
            print!("{}", prompt);
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;

    fn cli(name: &str, format: &str, domain: &str) -> Cli {
        Cli {
            name: Some(name.to_string()),
            format: Some(format.to_string()),
            domain: Some(domain.to_string()),
            json: false,
        }
    }

    #[test]
    fn generates_with_full_arguments() {
        let result = cmd_generate(cli("John Doe", "[first]_[last]", "@example.com"));
        assert!(result.is_ok());
    }

    #[test]
    fn generates_json_output() {
        let mut args = cli("John Doe", "[first][last]", "@example.com");
        args.json = true;
        assert!(cmd_generate(args).is_ok());
    }

    #[test]
    fn missing_middle_name_propagates() {
        let result = cmd_generate(cli("John Doe", "[first][middle][last]", "@example.com"));
        let err = result.unwrap_err();
        assert!(matches!(err, EmailError::MissingMiddleName));
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn unsplittable_name_becomes_a_user_error() {
        let result = cmd_generate(cli("John", "[first][last]", "@example.com"));
        let err = result.unwrap_err();
        assert!(matches!(err, EmailError::UserError(_)));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
