// Render adapters: both consume a finished session plus a layout plan and
// never alter the question data.

pub mod pdf;
pub mod screen;

pub use pdf::{default_output_name, export_pdf};
pub use screen::{render_screen, ScreenView};
