pub mod engine;
pub mod error;
pub mod gateway;
pub mod matcher;
pub mod session;
pub mod types;

pub use engine::WordAdder;
pub use error::{DuplicateKind, LeoError, TransportError};
pub use gateway::DictionaryGateway;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use types::{AddWordOutcome, CredentialSet, TranslationCandidate, WordRecord};
