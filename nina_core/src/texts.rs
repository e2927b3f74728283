//! Fixed user-facing texts and the system prompt.
//!
//! Everything here is static: none of it depends on session state and the
//! system prompt is sent unchanged with every completion request.

/// Safety contract for every completion request.
pub const SYSTEM_PROMPT: &str = "Você é Nina, uma assistente virtual acolhedora para pessoas com lúpus.
Seu papel é ouvir, acolher, validar emoções e oferecer informações gerais baseadas em ciência.
Você NÃO faz diagnóstico, NÃO prescreve medicamentos, NÃO sugere doses, NÃO substitui médicos.

Regras:
- Se o usuário pedir diagnóstico, remédio, dose ou conduta clínica: explique que não pode e sugira falar com o médico.
- Se houver sofrimento emocional intenso, desespero ou risco: acolha e sugira buscar apoio humano imediato (familiares, amigos, serviço de saúde).
Estilo:
- linguagem calorosa, simples, sem jargão, sem minimizar a dor.";

pub const WELCOME: &str = "Oi! Eu sou a Nina 💜

Eu posso te acolher, conversar e te ajudar com informações gerais e seguras sobre lúpus.
Eu não faço diagnóstico nem prescrevo medicamentos.

Comandos:
/checkin - registrar humor, fadiga, dor e sono (0 a 10)
/diario - escrever no seu diário do dia
/resumo - ver seus últimos registros
/fadiga - dicas gerais sobre fadiga
/sono - dicas gerais sobre sono
/ansiedade - dicas gerais sobre ansiedade
/mitos - mitos e verdades sobre lúpus

Se quiser, me conte como você está hoje.";

pub const FATIGUE: &str = "Fadiga no lúpus 💜

A fadiga é um dos sintomas mais comuns do lúpus e não é preguiça nem fraqueza.
Algumas ideias gerais que costumam ajudar:
• dividir as tarefas do dia em partes menores e alternar com pausas
• priorizar o que é essencial e pedir ajuda quando der
• movimentos leves, dentro do seu limite, quando o corpo permitir
• observar o que piora ou melhora e anotar no /diario

Se a fadiga mudar de repente ou ficar muito intensa, vale conversar com sua equipe de saúde.";

pub const SLEEP: &str = "Sono e lúpus 💜

Dormir mal pode aumentar a dor e o cansaço, e a dor pode atrapalhar o sono.
Algumas ideias gerais:
• tentar manter horários parecidos para deitar e acordar
• diminuir telas e luz forte perto da hora de dormir
• evitar cafeína no fim do dia
• criar um pequeno ritual calmo antes de deitar

Se o sono estiver ruim por muitos dias, converse com sua equipe de saúde.";

pub const ANXIETY: &str = "Ansiedade 💜

Conviver com uma doença crônica pode trazer preocupação e medo, e isso é compreensível.
Algumas ideias gerais:
• respirar devagar: inspirar contando até 4, soltar contando até 6, algumas vezes
• nomear o que está sentindo, sem se julgar
• conversar com alguém de confiança
• reduzir notícias e informações que aumentam o medo

Se a ansiedade estiver tomando conta do seu dia, procure apoio profissional. Em um momento de crise, busque ajuda humana imediata.";

pub const MYTHS: &str = "Mitos e verdades sobre lúpus 💜

• \"Lúpus é contagioso.\" Mito: ninguém pega lúpus de outra pessoa.
• \"Quem tem lúpus não pode ter uma vida ativa.\" Mito: com acompanhamento, muitas pessoas estudam, trabalham e fazem planos.
• \"O lúpus é igual para todo mundo.\" Mito: ele varia muito de pessoa para pessoa.
• \"O acompanhamento regular faz diferença.\" Verdade: consultas e exames ajudam a cuidar melhor de você.

Dúvidas sobre o seu caso? Leve para sua equipe de saúde.";

pub const CHECKIN_PROMPT: &str = "Vamos fazer seu check-in 💜

Me mande 4 números de 0 a 10, nesta ordem:
humor, fadiga, dor, sono

Exemplo: 6 7 3 5";

pub const CHECKIN_RETRY: &str =
    "Não consegui entender 😕 Me mande 4 números de 0 a 10: humor, fadiga, dor, sono. Exemplo: 6 7 3 5";

pub const DIARY_FIRST: &str = "Vamos escrever no seu diário 💜

O que mais pesou no seu dia hoje?";

pub const DIARY_SECOND: &str = "Obrigada por compartilhar. E o que ajudou um pouco hoje, mesmo que seja algo pequeno?";

pub const NO_TEXT: &str = "Eu te ouvi 💜 Quer me contar em texto como você está agora?";

pub const EMPTY_REPLY: &str = "Estou aqui com você 💜 Quer me contar um pouco mais?";

pub const TECHNICAL_ISSUE: &str = "Desculpa — tive uma instabilidade técnica aqui. 😕
Pode tentar mandar de novo?";

pub const SUMMARY_EMPTY: &str =
    "Ainda não tenho registros seus. Use /checkin ou /diario para começar 💜";
