mod enrollment;

pub use enrollment::*;
