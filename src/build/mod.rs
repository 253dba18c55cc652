mod clean;
mod core;

pub use clean::clean;
pub use core::{
    BUILD_DIR, BuildError, apply_build_mode, build_executable, build_object, build_shared,
    build_static,
};
