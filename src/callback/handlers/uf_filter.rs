//! UF filter selection: the user picked a state

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::callback::manager::CallbackHandler;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::views;

pub struct UfFilterCallbackHandler;

#[async_trait]
impl CallbackHandler for UfFilterCallbackHandler {
    fn name(&self) -> &'static str {
        "UfFilterCallbackHandler"
    }

    fn can_handle(&self, data: &CallbackData) -> bool {
        matches!(data, CallbackData::UfFilter { .. })
    }

    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
        let Some(CallbackData::UfFilter { uf }) = input.callback_data else {
            return Ok(views::uf_filter_view());
        };

        Ok(views::distance_filter_view(uf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::data::Uf;

    #[tokio::test]
    async fn test_renders_distance_filter_for_state() {
        let handler = UfFilterCallbackHandler;
        let input = CommandInput {
            callback_data: Some(CallbackData::uf_filter(Uf::Pr)),
            ..Default::default()
        };
        let output = handler.handle(input).await.unwrap();
        assert!(output.text.contains("Paraná"));
        assert!(output.edit_message);
        assert_eq!(output.keyboard.as_ref().map(|k| k.buttons.len()), Some(5));
    }
}
