//! Individual pane rendering modules

mod utils;

pub mod notes;
pub mod slide;
pub mod status;
pub mod toc;

pub use notes::render_notes_pane;
pub use slide::render_slide_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use toc::render_toc_pane;
