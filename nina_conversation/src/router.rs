//! Per-message dispatch and flow transitions.

use std::sync::Arc;

use nina_core::{LLMProvider, texts};
use nina_session::{CheckIn, DiaryEntry, DiaryStep, FlowState, Session, SessionStore};
use tracing::{debug, info};

use crate::{Command, ConversationEngine, parse_scores, render_summary};

/// Entries per group shown by `/resumo`.
pub const DEFAULT_SUMMARY_LIMIT: usize = 5;

/// Classifies each inbound message and produces the reply text.
///
/// The router performs no delivery itself. All session mutations for one
/// message happen while holding that chat's session lock.
pub struct Router<P = Arc<dyn LLMProvider>>
where
    P: Send + Sync,
{
    store: SessionStore,
    engine: ConversationEngine<P>,
    summary_limit: usize,
}

impl<P> Router<P>
where
    P: LLMProvider + Send + Sync,
{
    pub const fn new(store: SessionStore, engine: ConversationEngine<P>) -> Self {
        Self {
            store,
            engine,
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one inbound message.
    ///
    /// Returns `None` only when the chat identifier is missing (`0`).
    pub async fn handle_message(&self, chat_id: i64, text: &str) -> Option<String> {
        if chat_id == 0 {
            debug!("Ignoring message without chat id");
            return None;
        }

        let text = text.trim();
        let command = Command::parse_from_text(text);
        let mut session = self.store.lock(chat_id).await;
        debug!(
            "chat {chat_id}: command={command:?} flow={}",
            session.flow.label()
        );

        Some(self.route(&mut session, command, text).await)
    }

    async fn route(
        &self,
        session: &mut Session,
        command: Option<Command>,
        text: &str,
    ) -> String {
        if command == Some(Command::Start) {
            info!("chat {}: /start, resetting conversation", session.chat_id);
            session.reset_conversation();
            return texts::WELCOME.to_string();
        }

        if let Some(reply) = command.and_then(Command::educational_text) {
            return reply.to_string();
        }

        if command == Some(Command::Checkin) {
            session.set_flow(FlowState::AwaitingCheckin);
            return texts::CHECKIN_PROMPT.to_string();
        }

        if session.flow == FlowState::AwaitingCheckin {
            return self.finish_checkin(session, text).await;
        }

        if command == Some(Command::Diary) {
            session.set_flow(FlowState::Diary(DiaryStep::Weighed));
            return texts::DIARY_FIRST.to_string();
        }

        match session.flow.clone() {
            FlowState::Diary(DiaryStep::Weighed) => {
                return Self::diary_weighed(session, text);
            }
            FlowState::Diary(DiaryStep::Helped { weighed }) => {
                return self.finish_diary(session, weighed, text).await;
            }
            FlowState::Idle | FlowState::AwaitingCheckin => {}
        }

        if command == Some(Command::Summary) {
            return render_summary(session, self.summary_limit);
        }

        if text.is_empty() {
            return texts::NO_TEXT.to_string();
        }

        self.engine.reply(session, text).await
    }

    async fn finish_checkin(&self, session: &mut Session, text: &str) -> String {
        let scores = match parse_scores(text) {
            Ok(scores) => scores,
            Err(e) => {
                debug!("chat {}: invalid check-in: {e}", session.chat_id);
                return texts::CHECKIN_RETRY.to_string();
            }
        };

        let checkin = CheckIn::clamped(scores);
        let directive = checkin_directive(&checkin);
        session.checkins.append(checkin);
        session.set_flow(FlowState::Idle);

        self.engine.reply(session, &directive).await
    }

    fn diary_weighed(session: &mut Session, text: &str) -> String {
        if text.is_empty() {
            return texts::DIARY_FIRST.to_string();
        }
        session.set_flow(FlowState::Diary(DiaryStep::Helped {
            weighed: text.to_string(),
        }));
        texts::DIARY_SECOND.to_string()
    }

    async fn finish_diary(
        &self,
        session: &mut Session,
        weighed: String,
        text: &str,
    ) -> String {
        if text.is_empty() {
            return texts::DIARY_SECOND.to_string();
        }

        let entry = DiaryEntry::new(weighed, text.to_string());
        let directive = diary_directive(&entry);
        session.diaries.append(entry);
        session.set_flow(FlowState::Idle);

        self.engine.reply(session, &directive).await
    }
}

fn checkin_directive(checkin: &CheckIn) -> String {
    format!(
        "Check-in de hoje: humor {}/10, fadiga {}/10, dor {}/10, sono {}/10.\n\
         Acolha esses números com carinho, sem interpretar clinicamente, \
         e faça uma pergunta curta e empática para entender melhor como estou.",
        checkin.mood, checkin.fatigue, checkin.pain, checkin.sleep
    )
}

fn diary_directive(entry: &DiaryEntry) -> String {
    format!(
        "Diário de hoje.\nO que pesou: {}\nO que ajudou: {}\n\
         Acolha com empatia e sugira um pequeno próximo passo seguro para hoje.",
        entry.weighed, entry.helped
    )
}
