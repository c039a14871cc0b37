//! Reusable UI components for the studio

pub mod question_card;
pub mod sidebar;

pub use question_card::QuestionCard;
pub use sidebar::render_sidebar;
