pub mod header;
pub mod board;
pub mod column;
pub mod client_card;
pub mod client_modal;

pub use header::KanbanHeader;
pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use client_card::ClientCard;
pub use client_modal::ClientModal;
