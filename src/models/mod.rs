mod logo;
mod message;
mod step;

pub use logo::*;
pub use message::*;
pub use step::*;
