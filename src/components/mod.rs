//! UI Components
//!
//! Leptos components for the board sidebar, board view and toasts.

mod board_label;
mod board_view;
mod column_container;
mod sidebar;
mod task_card;
mod title_input;
mod toast;

pub use board_label::BoardLabel;
pub use board_view::BoardView;
pub use column_container::ColumnContainer;
pub use sidebar::Sidebar;
pub use task_card::TaskCard;
pub use title_input::TitleInput;
pub use toast::ToastHost;
