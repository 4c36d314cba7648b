mod args;

pub use args::{AnimationSpec, CliArgs};
