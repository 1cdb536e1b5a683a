pub mod camera;
pub mod cli;
pub mod config;
pub mod frame;
pub mod game;
pub mod input;
pub mod interaction;
pub mod math;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod types;

pub use camera::Camera;
pub use config::{SceneConfig, Variant};
pub use game::{GameSession, PopGame, SessionEvent};
pub use input::{PointerState, PointerTracker, Viewport};
pub use picking::{HoverEvent, HoverTracker, LinearPicker, PickResult, Picker};
pub use scene::{BubblePool, Scene, SpawnVolume};
