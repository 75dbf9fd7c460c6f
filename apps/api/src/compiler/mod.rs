// Document compilation pipeline: scoped workspace, Tectonic subprocess,
// platform font resolution, artifact harvesting.

pub mod engine;
pub mod fontconfig;
pub mod handlers;

pub use engine::{CompileError, LatexCompiler};
