//! Loading shader stage source text from disk.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// The two stage sources a program is built from.
///
/// Holds plain text; nothing here touches the GPU. The source is consumed at
/// build time and not retained by the resulting program, so there is no
/// caching across builds — two sequential builds from the same files read
/// them twice and produce functionally equivalent programs.
#[derive(Debug, Clone, Default)]
pub struct ShaderSource {
    /// Vertex stage source text.
    pub vertex: String,
    /// Fragment stage source text.
    pub fragment: String,
}

impl ShaderSource {
    /// Read both stage sources from disk.
    ///
    /// Files are read whole as UTF-8; no size cap is enforced.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SourceRead`] naming the failing path if either
    /// file cannot be read.
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            vertex: read_source(vertex_path.as_ref())?,
            fragment: read_source(fragment_path.as_ref())?,
        })
    }

    /// Read both stage sources, substituting empty text for unreadable files.
    ///
    /// Each read failure is logged and an empty source takes the file's
    /// place, so a later build fails with an ordinary compile diagnostic
    /// instead of the caller having to handle the read error here.
    pub fn load_or_empty(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            vertex: read_source_or_empty(vertex_path.as_ref()),
            fragment: read_source_or_empty(fragment_path.as_ref()),
        }
    }

    /// Wrap already-in-memory source text.
    pub fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

fn read_source(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_source_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("failed to read shader source {}: {err}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Write a throwaway file under the OS temp dir, unique per test.
    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("glow-program-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_round_trips_file_contents() {
        let vert = temp_file("roundtrip.vert", "#version 140\nvoid main() {}\n");
        let frag = temp_file("roundtrip.frag", "#version 140\nout vec4 c;\nvoid main() {}\n");

        let source = ShaderSource::load(&vert, &frag).unwrap();
        assert!(source.vertex.starts_with("#version 140"));
        assert!(source.fragment.contains("out vec4 c;"));

        fs::remove_file(vert).unwrap();
        fs::remove_file(frag).unwrap();
    }

    #[test]
    fn load_missing_file_reports_the_path() {
        let vert = temp_file("present.vert", "void main() {}\n");
        let missing = std::env::temp_dir().join("glow-program-does-not-exist.frag");

        let err = ShaderSource::load(&vert, &missing).unwrap_err();
        match err {
            BuildError::SourceRead { path, .. } => assert_eq!(path, missing),
            other => panic!("expected SourceRead, got {other:?}"),
        }

        fs::remove_file(vert).unwrap();
    }

    #[test]
    fn load_or_empty_substitutes_empty_text() {
        let frag = temp_file("lenient.frag", "void main() {}\n");
        let missing = std::env::temp_dir().join("glow-program-missing.vert");

        let source = ShaderSource::load_or_empty(&missing, &frag);
        assert!(source.vertex.is_empty());
        assert_eq!(source.fragment, "void main() {}\n");

        fs::remove_file(frag).unwrap();
    }

    #[test]
    fn from_strings_takes_text_verbatim() {
        let source = ShaderSource::from_strings("v", "f");
        assert_eq!(source.vertex, "v");
        assert_eq!(source.fragment, "f");
    }
}
