//! Slash-command parsing
//!
//! The adapter strips the platform's `/` prefix and an optional `@botname`
//! suffix here; the router only ever sees lowercase bare keywords.

/// A parsed command keyword plus its whitespace-separated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: String,
    pub args: Vec<String>,
}

/// Parses `/comando@bot arg1 arg2` into a lowercase keyword and args
///
/// Returns `None` for anything that is not a slash command.
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    let text = text.trim();
    let rest = text.strip_prefix('/')?;

    let mut tokens = rest.split_whitespace();
    let keyword = tokens.next().filter(|k| !k.is_empty())?;

    // "/corridas@VeloxBot" addresses this bot in group chats
    let keyword = keyword.split('@').next().unwrap_or(keyword);
    if keyword.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        command: keyword.to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_command() {
        let parsed = parse_command("/corridas").unwrap();
        assert_eq!(parsed.command, "corridas");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_parses_args_and_lowercases() {
        let parsed = parse_command("/Corridas SP 10k").unwrap();
        assert_eq!(parsed.command, "corridas");
        assert_eq!(parsed.args, vec!["SP", "10k"]);
    }

    #[test]
    fn test_strips_bot_mention() {
        let parsed = parse_command("/ajuda@VeloxBot").unwrap();
        assert_eq!(parsed.command, "ajuda");
    }

    #[test]
    fn test_rejects_non_commands() {
        assert_eq!(parse_command("oi, tudo bem?"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/@Bot"), None);
    }
}
