//! Splitting of the free-form `--extra` string into discrete arguments

use crate::error::CmrunError;

/// Split `extra` the way a POSIX shell splits words, without expansion
///
/// Whitespace separates arguments. Single quotes are literal. Inside
/// double quotes a backslash only escapes `$`, `` ` ``, `"`, `\\` and a
/// newline. Outside quotes a backslash escapes the next character. A
/// backslash-newline pair is removed in both cases.
pub fn split_extra(extra: &str) -> Result<Vec<String>, CmrunError> {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Plain,
        Single,
        Double,
    }

    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes `''` (an empty argument) from no argument at all
    let mut in_word = false;
    let mut state = State::Plain;
    let mut chars = extra.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Plain => match c {
                c if c.is_whitespace() => {
                    if in_word {
                        args.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| CmrunError::InvalidExtra {
                        message: "trailing backslash".to_string(),
                    })?;
                    if escaped != '\n' {
                        current.push(escaped);
                        in_word = true;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Plain,
                c => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Plain,
                '\\' => match chars.next() {
                    Some('\n') => {}
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => break,
                },
                c => current.push(c),
            },
        }
    }

    match state {
        State::Plain => {
            if in_word {
                args.push(current);
            }
            Ok(args)
        }
        State::Single => Err(CmrunError::InvalidExtra {
            message: format!("unterminated single quote in `{}`", extra),
        }),
        State::Double => Err(CmrunError::InvalidExtra {
            message: format!("unterminated double quote in `{}`", extra),
        }),
    }
}
