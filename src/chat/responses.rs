//! Canned reply pool.

use std::ops::RangeInclusive;

use rand::Rng;

/// Model name reported in every reply.
pub const MODEL_NAME: &str = "gpt-4-turbo";

/// Number of characters of the user message quoted back.
pub const EXCERPT_CHARS: usize = 50;

/// Range for the fabricated token count.
pub const TOKENS_USED: RangeInclusive<u32> = 50..=200;

/// A reply template, optionally quoting the user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Quoted {
        prefix: &'static str,
        suffix: &'static str,
    },
    Fixed(&'static str),
}

impl Template {
    pub fn render(&self, excerpt: &str) -> String {
        match self {
            Template::Quoted { prefix, suffix } => {
                let mut out = String::with_capacity(prefix.len() + excerpt.len() + suffix.len());
                out.push_str(prefix);
                out.push_str(excerpt);
                out.push_str(suffix);
                out
            }
            Template::Fixed(text) => (*text).to_string(),
        }
    }
}

pub const CANNED_RESPONSES: [Template; 5] = [
    Template::Quoted {
        prefix: "Интересный вопрос о \"",
        suffix: "...\". Я — современная языковая модель на базе трансформерной архитектуры. \
                 Могу помочь с анализом текста, генерацией контента, кодированием и многим другим.",
    },
    Template::Quoted {
        prefix: "Спасибо за ваш запрос! Я обработала \"",
        suffix: "...\" и готова предоставить детальный ответ. LLM модели используют механизм \
                 внимания (attention mechanism) для понимания контекста.",
    },
    Template::Quoted {
        prefix: "Отличный вопрос! Касательно \"",
        suffix: "...\" — могу сказать, что современные LLM обучаются на триллионах токенов и \
                 способны решать сложные задачи в различных доменах.",
    },
    Template::Fixed(
        "Я работаю на основе GPT-4 Turbo архитектуры с 175 миллиардами параметров. \
         Могу обрабатывать контекст до 128K токенов и генерировать ответы со скоростью \
         ~80 токенов в секунду.",
    ),
    Template::Fixed(
        "Моя основная задача — помогать пользователям решать задачи через понимание \
         естественного языка. Я могу генерировать код, анализировать данные, создавать \
         контент и многое другое.",
    ),
];

/// First [`EXCERPT_CHARS`] characters of `message`.
pub fn excerpt(message: &str) -> &str {
    match message.char_indices().nth(EXCERPT_CHARS) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}

/// Pick a template uniformly at random and render it for `message`.
pub fn compose<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    let index = rng.gen_range(0..CANNED_RESPONSES.len());
    CANNED_RESPONSES[index].render(excerpt(message))
}

/// Every reply `compose` can produce for `message`.
pub fn candidates(message: &str) -> Vec<String> {
    let quoted = excerpt(message);
    CANNED_RESPONSES.iter().map(|t| t.render(quoted)).collect()
}
