mod pointer;

pub use pointer::{PointerState, PointerTracker, Viewport};
