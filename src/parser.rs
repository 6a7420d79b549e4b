use crate::flagset::{FlagKind, FlagSet, FlagValue};
use crate::Error;

/// A structured view of one parse: the flag values that resulted and the
/// tokens left over for subcommand resolution
#[derive(Debug)]
#[non_exhaustive]
pub struct ParseResult {
    pub values: Vec<(String, FlagValue)>,
    pub leftover: Vec<String>,
}

/// Parses `tokens` against `flag_set`'s definitions.
///
/// Tokens are scanned left to right. Anything matching flag syntax is
/// consumed and its value coerced to the declared kind; scanning stops at
/// the first token that is not a flag (or at a bare `--`), and the rest is
/// returned verbatim as leftover. Flags never follow positionals. A flag
/// given twice keeps the last value.
pub fn parse<I, T>(flag_set: &mut FlagSet, tokens: I) -> Result<ParseResult, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(|t| t.into()).collect();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token == "--" {
            i += 1;
            break;
        }

        let Some(body) = flag_body(token) else {
            break;
        };

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let kind = flag_set
            .definition(name)
            .map(|d| d.kind())
            .ok_or_else(|| Error::UnrecognizedFlag {
                token: token.clone(),
            })?;

        i += 1;

        let value = match (inline, kind) {
            (Some(literal), _) => coerce(name, kind, literal)?,
            // A bool flag's value token is optional; presence implies true
            (None, FlagKind::Bool) => match tokens.get(i).map(String::as_str) {
                Some(literal @ ("true" | "false")) => {
                    i += 1;
                    coerce(name, kind, literal)?
                }
                _ => FlagValue::Bool(true),
            },
            (None, _) => {
                let literal = tokens.get(i).ok_or_else(|| Error::MissingValue {
                    flag: name.to_string(),
                })?;
                let value = coerce(name, kind, literal)?;
                i += 1;
                value
            }
        };

        flag_set.set(name, value);
    }

    Ok(ParseResult {
        values: flag_set.as_mapping(),
        leftover: tokens[i..].to_vec(),
    })
}

// A lone "-" is a conventional stdin placeholder, not a flag
fn flag_body(token: &str) -> Option<&str> {
    token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
        .filter(|body| !body.is_empty())
}

fn coerce(flag: &str, kind: FlagKind, literal: &str) -> Result<FlagValue, Error> {
    let value = match kind {
        FlagKind::Bool => literal.parse().ok().map(FlagValue::Bool),
        FlagKind::Int => literal.parse().ok().map(FlagValue::Int),
        FlagKind::Float => literal.parse().ok().map(FlagValue::Float),
        FlagKind::Str => Some(FlagValue::Str(literal.to_string())),
    };

    value.ok_or_else(|| Error::TypeCoercion {
        flag: flag.to_string(),
        value: literal.to_string(),
        kind,
    })
}
