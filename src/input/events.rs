//! Input events consumed from the host, plus a line-based script format for them.

use thiserror::Error;

/// A discrete input event delivered by the host UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary pointer button pressed over the canvas
    PointerDown { x: f64, y: f64 },
    /// Pointer moved over the canvas (pressed or not)
    PointerMove { x: f64, y: f64 },
    /// Primary pointer button released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    /// Tool button clicked
    SelectTool(String),
    /// User asked for a new sticker tool
    AddCustomTool { name: String, glyph: String },
    /// Color picker value changed
    ColorChange { r: u8, g: u8, b: u8 },
    Undo,
    Redo,
    Clear,
    Export,
}

/// Errors raised while parsing an event script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid value '{value}'")]
    InvalidValue { line: usize, value: String },
}

/// Parses a whole event script: one event per line, `#` comments and blank lines ignored.
///
/// A `#` opens a comment only at the start of a line or after whitespace, so
/// glyphs such as `C#` survive.
///
/// ```text
/// color 121 45 230
/// tool thick
/// down 10 10
/// move 20 20
/// up
/// add-tool cat 🐱
/// export
/// ```
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, ParseEventError> {
    let mut events = Vec::new();
    for (index, raw) in script.lines().enumerate() {
        if let Some(event) = parse_line(raw, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Parses one script line; returns `Ok(None)` for blank and comment lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<InputEvent>, ParseEventError> {
    let text = strip_comment(raw).trim();
    if text.is_empty() {
        return Ok(None);
    }

    let (command, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(command, rest)| (command, rest.trim()));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let missing = |expected: &'static str| ParseEventError::MissingArgument {
        line,
        command: command.to_string(),
        expected,
    };

    let event = match command {
        "down" | "move" => {
            let [x, y] = args.as_slice() else {
                return Err(missing("two coordinates"));
            };
            let (x, y) = (parse_value::<f64>(x, line)?, parse_value::<f64>(y, line)?);
            if command == "down" {
                InputEvent::PointerDown { x, y }
            } else {
                InputEvent::PointerMove { x, y }
            }
        }
        "up" => InputEvent::PointerUp,
        "leave" => InputEvent::PointerLeave,
        "tool" => {
            if rest.is_empty() {
                return Err(missing("a tool name"));
            }
            InputEvent::SelectTool(rest.to_string())
        }
        "add-tool" => {
            let Some((name, glyph)) = rest.split_once(char::is_whitespace) else {
                return Err(missing("a name and a glyph"));
            };
            InputEvent::AddCustomTool {
                name: name.to_string(),
                glyph: glyph.trim().to_string(),
            }
        }
        "color" => {
            let [r, g, b] = args.as_slice() else {
                return Err(missing("three channel values (0-255)"));
            };
            InputEvent::ColorChange {
                r: parse_value(r, line)?,
                g: parse_value(g, line)?,
                b: parse_value(b, line)?,
            }
        }
        "undo" => InputEvent::Undo,
        "redo" => InputEvent::Redo,
        "clear" => InputEvent::Clear,
        "export" => InputEvent::Export,
        other => {
            return Err(ParseEventError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    Ok(Some(event))
}

fn strip_comment(raw: &str) -> &str {
    let mut previous = None;
    for (index, ch) in raw.char_indices() {
        if ch == '#' && previous.is_none_or(char::is_whitespace) {
            return &raw[..index];
        }
        previous = Some(ch);
    }
    raw
}

fn parse_value<T: std::str::FromStr>(value: &str, line: usize) -> Result<T, ParseEventError> {
    value.parse().map_err(|_| ParseEventError::InvalidValue {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "\
            # warm-up\n\
            color 255 0 128\n\
            tool thick\n\
            down 10 10.5\n\
            move 20 20   # drag\n\
            up\n\
            leave\n\
            add-tool cat 🐱\n\
            \n\
            undo\n\
            redo\n\
            clear\n\
            export\n";

        let events = parse_script(script).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::ColorChange { r: 255, g: 0, b: 128 },
                InputEvent::SelectTool("thick".into()),
                InputEvent::PointerDown { x: 10.0, y: 10.5 },
                InputEvent::PointerMove { x: 20.0, y: 20.0 },
                InputEvent::PointerUp,
                InputEvent::PointerLeave,
                InputEvent::AddCustomTool {
                    name: "cat".into(),
                    glyph: "🐱".into()
                },
                InputEvent::Undo,
                InputEvent::Redo,
                InputEvent::Clear,
                InputEvent::Export,
            ]
        );
    }

    #[test]
    fn tool_names_may_contain_spaces() {
        assert_eq!(
            parse_line("tool big marker", 1).unwrap(),
            Some(InputEvent::SelectTool("big marker".into()))
        );
    }

    #[test]
    fn hash_inside_an_argument_is_not_a_comment() {
        assert_eq!(
            parse_line("add-tool sharp C#", 1).unwrap(),
            Some(InputEvent::AddCustomTool {
                name: "sharp".into(),
                glyph: "C#".into()
            })
        );
        assert_eq!(
            parse_line("add-tool sharp ♯#  # trailing note", 2).unwrap(),
            Some(InputEvent::AddCustomTool {
                name: "sharp".into(),
                glyph: "♯#".into()
            })
        );
        assert_eq!(parse_line("#down 1 1", 3).unwrap(), None);
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_script("up\n\nwiggle 3\n").unwrap_err();
        assert_eq!(
            err,
            ParseEventError::UnknownCommand {
                line: 3,
                command: "wiggle".into()
            }
        );
        assert_eq!(err.to_string(), "line 3: unknown command 'wiggle'");
    }

    #[test]
    fn rejects_out_of_range_channels() {
        assert_eq!(
            parse_line("color 256 0 0", 7),
            Err(ParseEventError::InvalidValue {
                line: 7,
                value: "256".into()
            })
        );
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(matches!(
            parse_line("down 4", 2),
            Err(ParseEventError::MissingArgument { line: 2, .. })
        ));
        assert!(matches!(
            parse_line("add-tool lonely", 5),
            Err(ParseEventError::MissingArgument { line: 5, .. })
        ));
    }
}
