//! Rendering of `/resumo`.

use std::fmt::Write;

use nina_core::texts;
use nina_session::Session;

const TIME_FORMAT: &str = "%d/%m %H:%M";

/// Recent check-ins and diary entries, oldest first within each group.
///
/// A group with no entries is left out; with no records at all a short
/// hint is returned instead.
#[must_use]
pub fn render_summary(session: &Session, limit: usize) -> String {
    let checkins = session.checkins.last_n(limit);
    let diaries = session.diaries.last_n(limit);

    if checkins.is_empty() && diaries.is_empty() {
        return texts::SUMMARY_EMPTY.to_string();
    }

    let mut out = String::from("📋 Seu resumo recente");

    if !checkins.is_empty() {
        out.push_str("\n\nCheck-ins:");
        for c in checkins {
            let _ = write!(
                out,
                "\n• {}: humor {}, fadiga {}, dor {}, sono {}",
                c.recorded_at.format(TIME_FORMAT),
                c.mood,
                c.fatigue,
                c.pain,
                c.sleep
            );
        }
    }

    if !diaries.is_empty() {
        out.push_str("\n\nDiário:");
        for d in diaries {
            let _ = write!(
                out,
                "\n• {}: pesou: {} | ajudou: {}",
                d.recorded_at.format(TIME_FORMAT),
                d.weighed,
                d.helped
            );
        }
    }

    out
}
