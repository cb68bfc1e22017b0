//! Library half of the quill binary, kept separate so the inspect transforms
//! can be unit tested without spawning the CLI.

pub mod transforms;
