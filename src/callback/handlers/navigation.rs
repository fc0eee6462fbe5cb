//! Generic navigation callbacks (back / next / close)

use async_trait::async_trait;

use crate::callback::data::{CallbackData, NavAction};
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::views;

pub struct NavigationCallbackHandler;

#[async_trait]
impl CallbackHandler for NavigationCallbackHandler {
    fn name(&self) -> &'static str {
        "NavigationCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::Navigation { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let Some(CallbackData::Navigation { action, target }) = input.callback_data else {
            return Ok(CommandOutput::html_edit("❌ Ação de navegação não reconhecida."));
        };

        Ok(match action {
            NavAction::Back => handle_back(&target),
            NavAction::Next => CommandOutput::html_edit(format!("➡️ Navegando para: {}", target)),
            NavAction::Close => CommandOutput::html_edit("❌ <i>Navegação encerrada</i>"),
        })
    }
}

fn handle_back(target: &str) -> CommandOutput {
    match target {
        // Back to the state picker re-renders it as a fresh message
        "uf_filter" => {
            let mut view = views::uf_filter_view();
            view.edit_message = true;
            view
        }
        other => CommandOutput::html_edit(format!("⬅️ Voltando para: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(data: CallbackData) -> CommandInput {
        CommandInput {
            callback_data: Some(data),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_back_to_uf_filter_renders_state_picker() {
        let handler = NavigationCallbackHandler;
        let output = handler
            .handle(input_with(CallbackData::navigation(NavAction::Back, "uf_filter")))
            .await
            .unwrap();
        assert!(output.edit_message);
        assert!(output.text.contains("Lista de Corridas"));
        assert!(output.keyboard.is_some());
    }

    #[tokio::test]
    async fn test_close_renders_closed_notice() {
        let handler = NavigationCallbackHandler;
        let output = handler
            .handle(input_with(CallbackData::navigation(NavAction::Close, "")))
            .await
            .unwrap();
        assert!(output.text.contains("encerrada"));
    }

    #[test]
    fn test_only_accepts_navigation() {
        let handler = NavigationCallbackHandler;
        assert!(handler.can_handle(&CallbackData::navigation(NavAction::Next, "x")));
        assert!(!handler.can_handle(&CallbackData::races_list(None)));
    }
}
