//! Message processing
//!
//! Runs TEA messages through `handler::update` until no follow-up message is
//! left, dispatching each resulting action.

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::services::RegistryApi;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<R>(state: &mut AppState, message: Message, ctx: &mut ActionContext<R>)
where
    R: RegistryApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        msg = result.message;
    }
}
