//! Progress reporting while a turn waits on the model

pub mod reporter;
