pub mod bridge;
pub mod classifier;
pub mod controller;
pub mod debounce;
pub mod sampler;

pub use bridge::{ClickThroughBridge, ClickThroughState};
pub use classifier::{is_visible, VisualSignals};
pub use controller::{ClickThroughController, ControllerLifecycle};
pub use debounce::{ModeSwitch, DEFAULT_DEBOUNCE};
pub use sampler::{is_over_content, HitTester, Point};
