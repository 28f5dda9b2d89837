//! Chat surface: the home page and its static display labels

use crate::shell::{ShellContext, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::Result;
use minijinja::{context, Environment};
use serde::Serialize;

const GREETING: &str = "👋 Hi! You're chatting with the **Academic Research** agent.

This agent can help you:
- **Explore academic literature** — e.g. \"Analyze the Attention is All You Need paper\"
- **Find related research** — e.g. \"What papers are related to transformer architectures?\"
- **Get research advice** — e.g. \"Suggest research directions in NLP\"
- **Search the web** for up-to-date academic knowledge

Ask anything research-related and the agent will use its tools to help.";

/// Display configuration for the chat widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatLabels {
    pub title: &'static str,
    pub placeholder: &'static str,
    /// Shown before any message has been exchanged
    pub initial: &'static str,
}

pub const LABELS: ChatLabels = ChatLabels {
    title: "Academic Research Assistant",
    placeholder: "Ask about papers, research directions, or related work…",
    initial: GREETING,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Renders the home page
///
/// Holds the compiled templates; conversation state lives only in the
/// browser.
pub struct ChatSurface {
    env: Environment<'static>,
    labels: ChatLabels,
}

impl ChatSurface {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../templates/layout.html"))?;
        env.add_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self {
            env,
            labels: LABELS,
        })
    }

    /// Messages visible before the user has typed anything: the greeting only
    pub fn initial_messages(&self) -> Vec<ChatMessage> {
        vec![ChatMessage {
            role: Role::Assistant,
            content: self.labels.initial.to_string(),
        }]
    }

    /// Render the home page inside the shell
    pub fn render(&self, shell: &ShellContext) -> Result<String> {
        let template = self.env.get_template("index.html")?;
        let html = template.render(context! {
            page_title => PAGE_TITLE,
            page_description => PAGE_DESCRIPTION,
            shell => shell,
            labels => self.labels,
            messages => self.initial_messages(),
        })?;
        Ok(html)
    }
}
