//! Error types for shader program construction.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The fixed pipeline role a compiled shader stage is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex stage.
    Vertex,
    /// The fragment stage.
    Fragment,
}

impl ShaderStage {
    /// The `glow` shader type constant for this stage.
    pub(crate) fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// An error produced while building a shader program.
///
/// Compile and link failures carry the driver's full info log. A link
/// failure is reported distinctly from a compile failure: it can occur even
/// when both stages compiled individually, e.g. for a varying consumed by
/// the fragment stage that the vertex stage never declares.
#[derive(Debug)]
pub enum BuildError {
    /// A shader source file could not be read.
    SourceRead {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A shader stage failed to compile.
    Compile {
        /// Which stage failed.
        stage: ShaderStage,
        /// The driver's compilation log.
        log: String,
    },
    /// The program failed to link.
    Link {
        /// The driver's link log.
        log: String,
    },
    /// The driver could not allocate a shader or program object.
    Allocate(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::SourceRead { path, source } => {
                write!(f, "failed to read shader source {}: {source}", path.display())
            }
            BuildError::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed: {log}")
            }
            BuildError::Link { log } => write!(f, "program link failed: {log}"),
            BuildError::Allocate(msg) => write!(f, "GL object allocation failed: {msg}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::SourceRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn compile_error_names_the_stage() {
        let err = BuildError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3: 'foo' : undeclared identifier".into(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("undeclared identifier"));
    }

    #[test]
    fn link_error_is_distinct_from_compile_error() {
        let err = BuildError::Link {
            log: "varying v_uv not written by vertex shader".into(),
        };
        let text = err.to_string();
        assert!(text.contains("link"));
        assert!(!text.contains("compilation"));
    }

    #[test]
    fn source_read_error_names_the_path_and_chains() {
        let err = BuildError::SourceRead {
            path: PathBuf::from("shaders/cube.vert"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("shaders/cube.vert"));
        assert!(err.source().is_some());
    }
}
