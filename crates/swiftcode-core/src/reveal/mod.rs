//! Progressive reveal of a snippet.

pub mod driver;
mod session;

pub use driver::{RevealHandle, spawn};
pub use session::{FrameOptions, RevealFrame, RevealSession, SessionId, SessionSeq};
