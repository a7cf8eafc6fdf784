use crate::config::{BackendConfig, Config};
use crate::infer::OpenAiClient;
use crate::prompts::PromptRevision;

pub struct AppState {
    pub backend: SpectraBackend,
}

pub enum SpectraBackend {
    /// Canned peak lists; no outbound calls.
    Dummy,
    /// Delegates each request to the chat-completions API.
    OpenAi {
        client: OpenAiClient,
        revision: PromptRevision,
    },
}

impl SpectraBackend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dummy => "dummy",
            Self::OpenAi { .. } => "openai",
        }
    }
}

impl AppState {
    pub fn new(backend: SpectraBackend) -> Self {
        Self { backend }
    }

    pub fn from_config(config: Config) -> Self {
        let backend = match config.backend {
            BackendConfig::Dummy => SpectraBackend::Dummy,
            BackendConfig::OpenAi {
                api_key,
                base_url,
                model,
                revision,
            } => SpectraBackend::OpenAi {
                client: OpenAiClient::new(api_key, base_url, model),
                revision,
            },
        };
        Self::new(backend)
    }
}
