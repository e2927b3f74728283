use nina_core::{LLMProvider, MessageSink};
use tracing::warn;

use crate::Router;

/// Route one message and hand the reply to `sink`.
///
/// Delivery failures are logged and dropped; there is no channel left to
/// report them to the user.
pub async fn run_turn<P, S>(router: &Router<P>, sink: &S, chat_id: i64, text: &str)
where
    P: LLMProvider + Send + Sync,
    S: MessageSink + ?Sized,
{
    let Some(reply) = router.handle_message(chat_id, text).await else {
        return;
    };

    if let Err(e) = sink.deliver(chat_id, &reply).await {
        warn!("Dropping reply: {e}");
    }
}
