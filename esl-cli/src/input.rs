use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("failed to read input file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin")]
    ReadStdin {
        #[source]
        source: io::Error,
    },

    #[error("input is empty")]
    EmptyInput,
}

pub(crate) type Result<T> = std::result::Result<T, InputError>;

/// Загружает входной блок:
/// - `--input FILE` -> содержимое файла
/// - иначе          -> весь stdin
pub(crate) fn load_input(path: Option<&Path>) -> Result<String> {
    let block = match path {
        Some(p) => load_from_file(p)?,
        None => read_block(io::stdin().lock()).map_err(|source| InputError::ReadStdin { source })?,
    };
    non_empty(block)
}

fn load_from_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn read_block<R: Read>(mut reader: R) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

fn non_empty(block: String) -> Result<String> {
    if block.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(block)
}
