//! Handler modules for keyboard input, the access gate and sharing.

mod gate_handler;
mod input_handler;
mod share_handler;

pub use gate_handler::GateHandler;
pub use input_handler::InputHandler;
pub use share_handler::ShareHandler;
