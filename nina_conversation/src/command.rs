use nina_core::texts;

/// Slash commands understood by the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Checkin,
    Diary,
    Summary,
    Fatigue,
    Sleep,
    Anxiety,
    Myths,
}

impl Command {
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Start,
            Self::Checkin,
            Self::Diary,
            Self::Summary,
            Self::Fatigue,
            Self::Sleep,
            Self::Anxiety,
            Self::Myths,
        ]
    }

    /// Command name without the leading slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Checkin => "checkin",
            Self::Diary => "diario",
            Self::Summary => "resumo",
            Self::Fatigue => "fadiga",
            Self::Sleep => "sono",
            Self::Anxiety => "ansiedade",
            Self::Myths => "mitos",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Start => "Começar de novo",
            Self::Checkin => "Registrar humor, fadiga, dor e sono",
            Self::Diary => "Escrever no diário do dia",
            Self::Summary => "Ver seus últimos registros",
            Self::Fatigue => "Dicas gerais sobre fadiga",
            Self::Sleep => "Dicas gerais sobre sono",
            Self::Anxiety => "Dicas gerais sobre ansiedade",
            Self::Myths => "Mitos e verdades sobre lúpus",
        }
    }

    /// Fixed reply for the educational commands.
    #[must_use]
    pub const fn educational_text(self) -> Option<&'static str> {
        match self {
            Self::Fatigue => Some(texts::FATIGUE),
            Self::Sleep => Some(texts::SLEEP),
            Self::Anxiety => Some(texts::ANXIETY),
            Self::Myths => Some(texts::MYTHS),
            Self::Start | Self::Checkin | Self::Diary | Self::Summary => None,
        }
    }

    /// Match the trimmed text against the command prefixes.
    ///
    /// Matching is case-sensitive and prefix-based, so `/start@nina_bot`
    /// and `/checkin agora` are recognized too.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        Self::all()
            .into_iter()
            .find(|cmd| rest.starts_with(cmd.name()))
    }
}
