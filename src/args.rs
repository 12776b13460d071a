//! Command-line parsing for the launcher
//!
//! This module turns the raw argument list into a [`Config`] record. The
//! scan walks the tokens left to right with a single "option awaiting a
//! value" register, the exact vocabulary being the one the launcher has
//! always shipped with.

use thiserror::Error;

/// Usage text printed for `--help` and for every configuration error.
pub const USAGE: &str = "\
usage: ktbs-launcher [options] <ktbs-url>
options:
 -u/--username <username> : if your kTBS requires authentication
 -p/--password <password> : if your kTBS requires authentication
 -r/--route    <route>    : to jump directly to a specific view
 -D/--debug               : open developer tools in all windows
 -h/--help                : displays this help message";

/// Short-form flags and the long forms they expand to.
const ARG_ABBR: [(&str, &str); 5] = [
    ("-u", "--username"),
    ("-p", "--password"),
    ("-r", "--route"),
    ("-D", "--debug"),
    ("-h", "--help"),
];

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// The kTBS root to load into the launcher page (the one positional
    /// argument).
    pub ktbs_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Appended to the launcher page URI as a `#fragment` for client-side
    /// routing.
    pub route: Option<String>,
    /// Open the WebKit inspector for every created window.
    pub debug: bool,
}

/// Terminal parse outcomes. All of these end the process after the usage
/// block is printed; only [`ArgsError::Help`] exits 0.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("No URL provided")]
    MissingUrl,
    #[error("Too many URLs")]
    TooManyUrls,
    #[error("Unknown option(s)")]
    UnknownOption,
    #[error("help requested")]
    Help,
}

/// The options that consume the following token as their value.
enum ValueOption {
    Username,
    Password,
    Route,
}

fn expand_abbreviation(token: &str) -> &str {
    ARG_ABBR
        .iter()
        .find(|(short, _)| *short == token)
        .map_or(token, |(_, long)| long)
}

/// Parses the argument list (program name excluded).
///
/// A token starting with `-` is always processed as a flag, even while an
/// option is awaiting its value: the earlier option is left unset and the
/// new flag takes over the register. Likewise, a trailing option with no
/// following token stays unset.
pub fn parse<I, S>(tokens: I) -> Result<Config, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = Config::default();
    let mut ktbs_url: Option<String> = None;
    let mut pending: Option<ValueOption> = None;

    for token in tokens {
        let token: String = token.into();
        if token.starts_with('-') {
            let flag = expand_abbreviation(&token);
            if flag == "--debug" {
                // Takes no value; an awaiting option stays armed.
                config.debug = true;
                continue;
            }
            if flag == "--help" {
                return Err(ArgsError::Help);
            }
            pending = Some(match flag.get(2..).unwrap_or("") {
                "username" => ValueOption::Username,
                "password" => ValueOption::Password,
                "route" => ValueOption::Route,
                _ => return Err(ArgsError::UnknownOption),
            });
        } else {
            match pending.take() {
                Some(ValueOption::Username) => config.username = Some(token),
                Some(ValueOption::Password) => config.password = Some(token),
                Some(ValueOption::Route) => config.route = Some(token),
                None => {
                    if ktbs_url.is_some() {
                        return Err(ArgsError::TooManyUrls);
                    }
                    ktbs_url = Some(token);
                }
            }
        }
    }

    config.ktbs_url = ktbs_url.ok_or(ArgsError::MissingUrl)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(tokens: &[&str]) -> Result<Config, ArgsError> {
        parse(tokens.iter().copied())
    }

    #[test]
    fn url_only() {
        let config = parse_args(&["http://ktbs.example/"]).unwrap();
        assert_eq!(
            config,
            Config {
                ktbs_url: "http://ktbs.example/".into(),
                ..Config::default()
            }
        );
    }

    #[test]
    fn all_short_options() {
        let config = parse_args(&[
            "-u",
            "bob",
            "-p",
            "secret",
            "-r",
            "trace/42",
            "http://ktbs.example/",
        ])
        .unwrap();
        assert_eq!(
            config,
            Config {
                ktbs_url: "http://ktbs.example/".into(),
                username: Some("bob".into()),
                password: Some("secret".into()),
                route: Some("trace/42".into()),
                debug: false,
            }
        );
    }

    #[test]
    fn short_and_long_forms_are_interchangeable() {
        let short = parse_args(&["-u", "alice", "http://ktbs.example/"]).unwrap();
        let long = parse_args(&["--username", "alice", "http://ktbs.example/"]).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn debug_flag() {
        let config = parse_args(&["-D", "http://ktbs.example/"]).unwrap();
        assert!(config.debug);
        assert_eq!(config.ktbs_url, "http://ktbs.example/");
    }

    #[test]
    fn debug_does_not_disarm_an_awaiting_option() {
        let config = parse_args(&["-u", "-D", "alice", "http://ktbs.example/"]).unwrap();
        assert!(config.debug);
        assert_eq!(config.username.as_deref(), Some("alice"));
    }

    #[test]
    fn unknown_option() {
        assert_eq!(
            parse_args(&["-x", "http://ktbs.example/"]),
            Err(ArgsError::UnknownOption)
        );
    }

    #[test]
    fn bare_dash_is_unknown() {
        assert_eq!(
            parse_args(&["-", "http://ktbs.example/"]),
            Err(ArgsError::UnknownOption)
        );
    }

    #[test]
    fn no_url() {
        assert_eq!(parse_args(&[]), Err(ArgsError::MissingUrl));
        assert_eq!(parse_args(&["-u", "bob"]), Err(ArgsError::MissingUrl));
    }

    #[test]
    fn too_many_urls() {
        assert_eq!(
            parse_args(&["http://a.example/", "http://b.example/"]),
            Err(ArgsError::TooManyUrls)
        );
    }

    #[test]
    fn help_short_and_long() {
        assert_eq!(parse_args(&["-h"]), Err(ArgsError::Help));
        assert_eq!(
            parse_args(&["http://ktbs.example/", "--help"]),
            Err(ArgsError::Help)
        );
    }

    #[test]
    fn flag_following_a_flag_replaces_the_awaiting_option() {
        let config = parse_args(&["-u", "-p", "secret", "http://ktbs.example/"]).unwrap();
        assert_eq!(config.username, None);
        assert_eq!(config.password.as_deref(), Some("secret"));
    }

    #[test]
    fn trailing_option_without_value_stays_unset() {
        let config = parse_args(&["http://ktbs.example/", "-r"]).unwrap();
        assert_eq!(config.route, None);
    }

    #[test]
    fn usage_names_every_option() {
        for flag in ["--username", "--password", "--route", "--debug", "--help"] {
            assert!(USAGE.contains(flag), "usage text is missing {flag}");
        }
    }
}
