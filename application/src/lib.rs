//! Application layer for ai-debate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DebateParams, RetryPolicy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DebateProgressNotifier, NoProgress},
    response_generator::{
        CHAT_ERROR_PREFIX, GeneratedResponse, GenerationError, PerspectiveRequest,
        ResponseGenerator,
    },
    transport::{
        BackendRequest, CHAT_ENDPOINT, RESEARCH_PAPER_ENDPOINT, SendError, Transport,
        TransportError,
    },
};
pub use use_cases::generate_paper::GeneratePaperUseCase;
pub use use_cases::get_response::GetResponseUseCase;
pub use use_cases::run_debate::{DebateError, DebateOrchestrator};
