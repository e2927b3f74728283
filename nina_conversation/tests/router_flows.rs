//! End-to-end routing scenarios driven through `Router::handle_message`.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use nina_conversation::{ConversationEngine, EngineConfig, Router, run_turn};
use nina_core::{
    ChatMessage, DeliveryError, LLMProvider, LLMResponse, MessageSink, Role, texts,
};
use nina_session::{CheckIn, DiaryStep, FlowState, SessionStore};

const CHAT: i64 = 4242;

/// Completion backend that records every request.
#[derive(Default)]
struct MockProvider {
    requests: Mutex<Vec<Vec<ChatMessage>>>,
    failing: AtomicBool,
}

impl MockProvider {
    fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> Vec<ChatMessage> {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    async fn chat(&self, messages: &[ChatMessage], _model: &str) -> anyhow::Result<LLMResponse> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(messages.to_vec());
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("connection reset");
        }
        Ok(LLMResponse {
            content: format!("resposta {}", requests.len()),
            usage: None,
        })
    }

    fn get_default_model(&self) -> &str {
        "mock"
    }
}

fn router() -> (Router<Arc<MockProvider>>, Arc<MockProvider>) {
    let provider = Arc::new(MockProvider::default());
    let engine = ConversationEngine::new(Arc::clone(&provider), EngineConfig::default());
    (Router::new(SessionStore::default(), engine), provider)
}

async fn send(router: &Router<Arc<MockProvider>>, text: &str) -> String {
    router.handle_message(CHAT, text).await.unwrap()
}

#[tokio::test]
async fn missing_chat_id_is_ignored() {
    let (router, provider) = router();
    assert!(router.handle_message(0, "oi").await.is_none());
    assert!(router.store().is_empty().await);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn start_returns_onboarding() {
    let (router, provider) = router();
    let reply = send(&router, "/start").await;
    assert_eq!(reply, texts::WELCOME);
    assert!(reply.contains("/checkin"));
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn educational_commands_are_static() {
    let (router, provider) = router();
    assert_eq!(send(&router, "/fadiga").await, texts::FATIGUE);
    assert_eq!(send(&router, "/sono").await, texts::SLEEP);
    assert_eq!(send(&router, "/ansiedade").await, texts::ANXIETY);
    assert_eq!(send(&router, "/mitos").await, texts::MYTHS);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn checkin_scenario() {
    let (router, provider) = router();

    assert_eq!(send(&router, "/checkin").await, texts::CHECKIN_PROMPT);
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.flow, FlowState::AwaitingCheckin);

    let reply = send(&router, "5 9 3 6").await;
    assert_eq!(reply, "resposta 1");

    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.flow, FlowState::Idle);
    assert_eq!(session.checkins.len(), 1);
    assert_eq!(session.checkins.last_n(1)[0].scores(), [5, 9, 3, 6]);

    let request = provider.last_request();
    assert_eq!(request[0], ChatMessage::system(texts::SYSTEM_PROMPT));
    let directive = &request[1];
    assert_eq!(directive.role, Role::User);
    assert!(directive.content.contains("humor 5/10, fadiga 9/10, dor 3/10, sono 6/10"));
}

#[tokio::test]
async fn checkin_values_are_clamped() {
    let (router, _) = router();
    send(&router, "/checkin").await;
    send(&router, "5 15 -3 6").await;

    let session = router.store().snapshot(CHAT).await.unwrap();
    let checkin: &CheckIn = &session.checkins.last_n(1)[0];
    assert_eq!(
        (checkin.mood, checkin.fatigue, checkin.pain, checkin.sleep),
        (5, 10, 0, 6)
    );
}

#[tokio::test]
async fn malformed_checkin_keeps_waiting() {
    let (router, provider) = router();
    send(&router, "/checkin").await;

    for bad in ["5 9 3", "cinco nove três seis", "5 9 x 6", "", "/diario"] {
        assert_eq!(send(&router, bad).await, texts::CHECKIN_RETRY, "input {bad:?}");
        let session = router.store().snapshot(CHAT).await.unwrap();
        assert_eq!(session.flow, FlowState::AwaitingCheckin);
        assert!(session.checkins.is_empty());
    }
    assert_eq!(provider.request_count(), 0);

    send(&router, "1,2,3,4").await;
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.checkins.len(), 1);
}

#[tokio::test]
async fn diary_scenario() {
    let (router, provider) = router();

    assert_eq!(send(&router, "/diario").await, texts::DIARY_FIRST);
    assert_eq!(send(&router, "trabalho pesado").await, texts::DIARY_SECOND);

    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(
        session.flow,
        FlowState::Diary(DiaryStep::Helped {
            weighed: "trabalho pesado".to_string()
        })
    );
    assert!(session.diaries.is_empty());
    assert_eq!(provider.request_count(), 0);

    let reply = send(&router, "caminhada").await;
    assert_eq!(reply, "resposta 1");

    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.flow, FlowState::Idle);
    let entry = &session.diaries.last_n(1)[0];
    assert_eq!(entry.weighed, "trabalho pesado");
    assert_eq!(entry.helped, "caminhada");

    let directive = &provider.last_request()[1].content;
    assert!(directive.contains("trabalho pesado"));
    assert!(directive.contains("caminhada"));
}

#[tokio::test]
async fn diary_step_one_captures_any_text() {
    let (router, _) = router();
    send(&router, "/diario").await;

    // Commands that come after the diary check in the dispatch order are
    // taken as answers.
    assert_eq!(send(&router, "/resumo").await, texts::DIARY_SECOND);
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(
        session.flow,
        FlowState::Diary(DiaryStep::Helped {
            weighed: "/resumo".to_string()
        })
    );
}

#[tokio::test]
async fn empty_text_does_not_advance_diary() {
    let (router, _) = router();
    send(&router, "/diario").await;
    assert_eq!(send(&router, "   ").await, texts::DIARY_FIRST);
    assert_eq!(
        router.store().snapshot(CHAT).await.unwrap().flow,
        FlowState::Diary(DiaryStep::Weighed)
    );

    send(&router, "dor nas juntas").await;
    assert_eq!(send(&router, "").await, texts::DIARY_SECOND);
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert!(session.diaries.is_empty());
    assert!(matches!(session.flow, FlowState::Diary(DiaryStep::Helped { .. })));
}

#[tokio::test]
async fn new_flow_replaces_unfinished_one() {
    let (router, _) = router();
    send(&router, "/diario").await;
    send(&router, "cansaço").await;

    assert_eq!(send(&router, "/checkin").await, texts::CHECKIN_PROMPT);
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.flow, FlowState::AwaitingCheckin);
    assert!(session.diaries.is_empty());
}

#[tokio::test]
async fn start_keeps_records() {
    let (router, _) = router();
    send(&router, "/checkin").await;
    send(&router, "5 9 3 6").await;
    send(&router, "como lidar com o calor?").await;
    send(&router, "/diario").await;

    send(&router, "/start").await;

    let session = router.store().snapshot(CHAT).await.unwrap();
    assert!(session.memory.is_empty());
    assert_eq!(session.flow, FlowState::Idle);

    let summary = send(&router, "/resumo").await;
    assert!(summary.contains("humor 5, fadiga 9, dor 3, sono 6"));
}

#[tokio::test]
async fn summary_shows_last_five_and_omits_empty_groups() {
    let (router, provider) = router();
    assert_eq!(send(&router, "/resumo").await, texts::SUMMARY_EMPTY);

    for i in 0..7 {
        send(&router, "/checkin").await;
        send(&router, &format!("{i} 1 1 1")).await;
    }
    let requests_before = provider.request_count();

    let summary = send(&router, "/resumo").await;
    assert_eq!(provider.request_count(), requests_before);
    assert!(summary.contains("Check-ins:"));
    assert!(!summary.contains("Diário:"));
    assert!(!summary.contains("humor 1,"));
    let oldest = summary.find("humor 2,").unwrap();
    let newest = summary.find("humor 6,").unwrap();
    assert!(oldest < newest);
    assert_eq!(summary.matches("humor ").count(), 5);
}

#[tokio::test]
async fn empty_text_gets_gentle_prompt() {
    let (router, provider) = router();
    assert_eq!(send(&router, "  \n ").await, texts::NO_TEXT);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn free_conversation_uses_memory() {
    let (router, provider) = router();
    send(&router, "oi Nina").await;
    let reply = send(&router, "hoje estou cansada").await;
    assert_eq!(reply, "resposta 2");

    let request = provider.last_request();
    assert_eq!(
        request,
        vec![
            ChatMessage::system(texts::SYSTEM_PROMPT),
            ChatMessage::user("oi Nina"),
            ChatMessage::assistant("resposta 1"),
            ChatMessage::user("hoje estou cansada"),
        ]
    );
}

#[tokio::test]
async fn memory_stays_bounded() {
    let (router, _) = router();
    for i in 0..12 {
        send(&router, &format!("mensagem {i}")).await;
        let session = router.store().snapshot(CHAT).await.unwrap();
        assert!(session.memory.len() <= 10);
    }

    let memory = router.store().snapshot(CHAT).await.unwrap().memory.to_vec();
    assert_eq!(memory[0], ChatMessage::user("mensagem 7"));
    assert_eq!(memory[9], ChatMessage::assistant("resposta 12"));
}

#[tokio::test]
async fn completion_failure_apologizes_without_touching_memory() {
    let (router, provider) = router();
    send(&router, "oi").await;
    let before = router.store().snapshot(CHAT).await.unwrap().memory.to_vec();

    provider.fail(true);
    let reply = send(&router, "você está aí?").await;

    assert_eq!(reply, texts::TECHNICAL_ISSUE);
    let after = router.store().snapshot(CHAT).await.unwrap().memory.to_vec();
    assert_eq!(before, after);
}

#[tokio::test]
async fn checkin_is_stored_even_if_follow_up_fails() {
    let (router, provider) = router();
    provider.fail(true);
    send(&router, "/checkin").await;

    assert_eq!(send(&router, "3 3 3 3").await, texts::TECHNICAL_ISSUE);
    let session = router.store().snapshot(CHAT).await.unwrap();
    assert_eq!(session.checkins.len(), 1);
    assert_eq!(session.flow, FlowState::Idle);
    assert!(session.memory.is_empty());
}

#[tokio::test]
async fn chats_do_not_share_state() {
    let (router, _) = router();
    send(&router, "/checkin").await;

    let other = router.handle_message(7, "oi").await.unwrap();
    assert_eq!(other, "resposta 1");
    assert_eq!(
        router.store().snapshot(CHAT).await.unwrap().flow,
        FlowState::AwaitingCheckin
    );
}

/// Sink that records deliveries and can be set to fail.
#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<(i64, String)>>,
    failing: AtomicBool,
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn deliver(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DeliveryError::Transport {
                chat_id,
                reason: "bad gateway".to_string(),
            });
        }
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

#[tokio::test]
async fn run_turn_delivers_reply() {
    let (router, _) = router();
    let sink = RecordingSink::default();

    run_turn(&router, &sink, CHAT, "/mitos").await;
    run_turn(&router, &sink, 0, "/mitos").await;

    let sent = sink.sent.lock().unwrap();
    assert_eq!(sent.as_slice(), &[(CHAT, texts::MYTHS.to_string())]);
}

#[tokio::test]
async fn run_turn_swallows_delivery_failure() {
    let (router, _) = router();
    let sink = RecordingSink::default();
    sink.failing.store(true, Ordering::SeqCst);

    run_turn(&router, &sink, CHAT, "/checkin").await;

    // The turn still happened even though the user never saw the reply.
    assert_eq!(
        router.store().snapshot(CHAT).await.unwrap().flow,
        FlowState::AwaitingCheckin
    );
    assert!(sink.sent.lock().unwrap().is_empty());
}
