//! Pure calendar logic: no terminal, no process exits.

pub mod render;
pub mod validate;
