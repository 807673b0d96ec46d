//! `:` commands typed into the command bar.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `reroll`, `rr` | Draw another article from the current matches |
//! | `stable [on\|off]` | Set or toggle stable selection |
//! | `clear` | Empty the query bar |
//! | `reload` | Re-read the catalog |

/// A parsed command, ready for the app shell to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Reroll,
    /// `None` toggles the current policy.
    Stable(Option<bool>),
    Clear,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse the text typed after `:`. Blank input is `Ok(None)`.
    pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(CommandError::Usage(usage(head)));
        }

        let cmd = match (head, arg) {
            ("q" | "quit" | "q!" | "quit!", None) => Command::Quit,
            ("help", None) => Command::Help,
            ("reroll" | "rr", None) => Command::Reroll,
            ("clear", None) => Command::Clear,
            ("reload", None) => Command::Reload,
            ("theme", Some(name)) => Command::Theme(name.to_string()),
            ("stable", None) => Command::Stable(None),
            ("stable", Some("on" | "true" | "yes")) => Command::Stable(Some(true)),
            ("stable", Some("off" | "false" | "no")) => Command::Stable(Some(false)),
            ("q" | "quit" | "q!" | "quit!" | "help" | "reroll" | "rr" | "clear" | "reload"
            | "theme" | "stable", _) => return Err(CommandError::Usage(usage(head))),
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn usage(head: &str) -> &'static str {
    match head {
        "theme" => "theme <default|gruvbox>",
        "stable" => "stable [on|off]",
        "q" | "q!" => "q",
        "quit" | "quit!" => "quit",
        "help" => "help",
        "reroll" | "rr" => "reroll",
        "clear" => "clear",
        "reload" => "reload",
        _ => "q | help | theme <name> | reroll | stable [on|off] | clear | reload",
    }
}
