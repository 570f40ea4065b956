use crate::tree::TreeNode;
use futures::io::{AllowStdIo, AsyncRead, AsyncReadExt};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document read when no input is given.
pub const DEFAULT_DOCUMENT: &str = "after.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// `None` selects [`DEFAULT_DOCUMENT`], `-` selects stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path == Path::new("-") => Self::Stdin,
            Some(path) => Self::Path(path.to_path_buf()),
            None => Self::Path(PathBuf::from(DEFAULT_DOCUMENT)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// The document could not be fetched or parsed. Nothing downstream of the
/// load runs when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tree document {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tree document {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn load_document(source: &Source) -> Result<TreeNode, LoadError> {
    let origin = source.to_string();
    log::debug!("loading tree document from {origin}");
    match source {
        Source::Path(path) => {
            let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
                origin: origin.clone(),
                source,
            })?;
            load_from_reader(AllowStdIo::new(file), &origin).await
        }
        Source::Stdin => load_from_reader(AllowStdIo::new(std::io::stdin()), &origin).await,
    }
}

pub async fn load_from_reader<R>(mut reader: R, origin: &str) -> Result<TreeNode, LoadError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .await
        .map_err(|source| LoadError::Io {
            origin: origin.to_string(),
            source,
        })?;
    let root = parse_tree(&buf).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    log::debug!("loaded {} nodes from {origin}", root.size());
    Ok(root)
}

// Documents may nest arbitrarily deep: the recursion limit is off and the
// stack grows on demand while descending into `children`.
fn parse_tree(json: &str) -> Result<TreeNode, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let root = TreeNode::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(root)
}
