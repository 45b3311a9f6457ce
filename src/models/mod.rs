pub mod health;
pub mod diagnostics;
pub mod documents;
pub mod messages;

pub use health::*;
pub use diagnostics::*;
pub use documents::*;
pub use messages::*;
