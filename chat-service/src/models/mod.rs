pub mod chat_turn;
pub mod language;
pub mod response_type;

pub use chat_turn::ChatTurn;
pub use language::Language;
pub use response_type::ResponseType;
