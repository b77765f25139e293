// Presentation-mode machinery: the only asynchronous edges of the app
// (fullscreen transitions, debounced resizes) modelled as explicit state
// machines with injected time, so everything stays synchronously testable.

pub mod debounce;
pub mod fullscreen;

pub use debounce::{ResizeDebouncer, RESIZE_DEBOUNCE};
pub use fullscreen::{FullscreenDriver, PresentationController};
