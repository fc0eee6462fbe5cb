//! Basic informational commands

use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::messages::basic;

pub async fn start_command(input: CommandInput) -> BotResult<CommandOutput> {
    log::info!(
        "Processing start command (platform: {:?}, user: {:?})",
        input.platform,
        input.user_id()
    );

    let user_name = input
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "usuário".to_string());

    Ok(CommandOutput::html(basic::start(&user_name)))
}

pub async fn help_command(_input: CommandInput) -> BotResult<CommandOutput> {
    Ok(CommandOutput::html(basic::HELP))
}

pub async fn contact_command(_input: CommandInput) -> BotResult<CommandOutput> {
    Ok(CommandOutput::html(basic::CONTACT))
}

pub async fn about_command(_input: CommandInput) -> BotResult<CommandOutput> {
    Ok(CommandOutput::html(basic::ABOUT))
}

pub async fn sponsorship_command(_input: CommandInput) -> BotResult<CommandOutput> {
    Ok(CommandOutput::html(basic::SPONSORSHIP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::UserRef;

    #[tokio::test]
    async fn test_start_greets_by_name() {
        let input = CommandInput {
            user: Some(UserRef {
                id: "42".to_string(),
                name: Some("Rafa".to_string()),
            }),
            ..Default::default()
        };
        let output = start_command(input).await.unwrap();
        assert!(output.text.contains("Olá, Rafa!"));
    }

    #[tokio::test]
    async fn test_start_falls_back_to_generic_name() {
        let output = start_command(CommandInput::default()).await.unwrap();
        assert!(output.text.contains("Olá, usuário!"));
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let output = help_command(CommandInput::default()).await.unwrap();
        for command in ["/start", "/ajuda", "/contato", "/sobre", "/patrocinio", "/corridas", "/favoritos"] {
            assert!(output.text.contains(command), "missing {}", command);
        }
    }
}
