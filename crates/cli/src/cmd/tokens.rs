//! Turning command-line tokens into arguments.

use std::path::Path;

use varopts_core::Arg;
use varopts_core::ImportOptions;

/// Parse one token as a YAML value.
///
/// `:` is taken literally since YAML would reject it.
pub fn parse_token(token: &str) -> Result<Arg, String> {
    if token == ":" {
        return Ok(Arg::from(":"));
    }
    serde_yaml::from_str(token).map_err(|_| {
        format!(
            "cannot use '{token}' as an argument: expected text, a number, \
             a logical, or a list of one of those"
        )
    })
}

/// Parse every token, exiting with status 2 on the first bad one.
pub fn parse_tokens(tokens: &[String]) -> Vec<Arg> {
    tokens
        .iter()
        .map(|t| {
            parse_token(t).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            })
        })
        .collect()
}

/// Load an options document, exiting with status 1 on failure.
pub fn load_options(path: &Path) -> ImportOptions {
    match ImportOptions::load(path) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_shapes() {
        assert_eq!(parse_token("A").unwrap(), Arg::from("A"));
        assert_eq!(parse_token(":").unwrap(), Arg::from(":"));
        assert_eq!(parse_token("[A, C]").unwrap(), Arg::from(vec!["A", "C"]));
        assert_eq!(parse_token("3").unwrap(), Arg::Number(3.0));
        assert_eq!(parse_token("-1.5").unwrap(), Arg::Number(-1.5));
        assert_eq!(parse_token("[true, false]").unwrap(), Arg::Logicals(vec![true, false]));
        assert_eq!(parse_token("''").unwrap(), Arg::from(""));
        assert!(matches!(parse_token(".nan").unwrap(), Arg::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_parse_token_rejects_maps() {
        assert!(parse_token("{a: 1}").is_err());
        assert!(parse_token("[a, 1]").is_err());
    }
}
