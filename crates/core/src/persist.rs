//! Board persistence.
//!
//! The save file is the board's cells in row-major order, each a native-endian
//! `i32`, with no header, checksum, or version tag. Loading overwrites as many
//! whole cells as the file provides; cells past a truncated end keep their
//! current values and extra trailing bytes are ignored. Values are not validated.

use std::fs::File;
use std::io::{self, Read, Write};
use std::mem::size_of;
use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::types::{Cell, BOARD_SIZE, CELL_COUNT};

const CELL_BYTES: usize = size_of::<Cell>();

/// Size in bytes of a complete save file.
pub const SAVE_LEN: usize = CELL_COUNT * CELL_BYTES;

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("cannot open {} for writing: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("cannot open {} for reading: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("write to {} failed: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("read from {} failed: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl PersistError {
    pub fn path(&self) -> &Path {
        match self {
            PersistError::Create { path, .. }
            | PersistError::Open { path, .. }
            | PersistError::Write { path, .. }
            | PersistError::Read { path, .. } => path,
        }
    }
}

/// Serialize the board into the save layout.
pub fn encode(board: &Board) -> [u8; SAVE_LEN] {
    let mut out = [0u8; SAVE_LEN];
    for (chunk, cell) in out.chunks_exact_mut(CELL_BYTES).zip(board.iter()) {
        chunk.copy_from_slice(&cell.to_ne_bytes());
    }
    out
}

/// Overwrite `board` from save-layout bytes. Returns the number of cells read.
pub fn decode_into(bytes: &[u8], board: &mut Board) -> usize {
    let mut read = 0usize;
    for (i, chunk) in bytes.chunks_exact(CELL_BYTES).take(CELL_COUNT).enumerate() {
        let mut raw = [0u8; CELL_BYTES];
        raw.copy_from_slice(chunk);
        board.set(i / BOARD_SIZE, i % BOARD_SIZE, Cell::from_ne_bytes(raw));
        read += 1;
    }
    read
}

/// Write the board to `path`, replacing any existing file.
pub fn save_board(path: &Path, board: &Board) -> Result<(), PersistError> {
    let mut file = File::create(path).map_err(|source| PersistError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&encode(board))
        .and_then(|_| file.flush())
        .map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Read `path` into `board`. The board is untouched if the file cannot be opened.
pub fn load_board(path: &Path, board: &mut Board) -> Result<usize, PersistError> {
    let mut file = File::open(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::with_capacity(SAVE_LEN);
    file.read_to_end(&mut bytes)
        .map_err(|source| PersistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(decode_into(&bytes, board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Board {
        Board::from_rows([[2, 0, 4, 8], [16, 32, 64, 128], [0, 0, 0, 0], [2048, 1024, 512, 256]])
    }

    #[test]
    fn test_encode_is_row_major_native_endian() {
        let bytes = encode(&sample());
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[0..4], &2i32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0i32.to_ne_bytes());
        assert_eq!(&bytes[16..20], &16i32.to_ne_bytes());
        assert_eq!(&bytes[60..64], &256i32.to_ne_bytes());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        save_board(file.path(), &sample()).unwrap();
        assert_eq!(std::fs::metadata(file.path()).unwrap().len(), SAVE_LEN as u64);

        let mut board = Board::new();
        assert_eq!(load_board(file.path(), &mut board).unwrap(), CELL_COUNT);
        assert_eq!(board, sample());
    }

    #[test]
    fn test_truncated_file_keeps_trailing_cells() {
        let mut board = Board::from_rows([[1; 4]; 4]);
        let bytes = encode(&sample());
        // Five whole cells plus half of the sixth.
        let read = decode_into(&bytes[..22], &mut board);
        assert_eq!(read, 5);
        assert_eq!(board.rows()[0], [2, 0, 4, 8]);
        assert_eq!(board.rows()[1], [16, 1, 1, 1]);
        assert_eq!(board.rows()[3], [1, 1, 1, 1]);
    }

    #[test]
    fn test_extra_bytes_are_ignored() {
        let mut bytes = encode(&sample()).to_vec();
        bytes.extend_from_slice(&[0xff; 12]);
        let mut board = Board::new();
        assert_eq!(decode_into(&bytes, &mut board), CELL_COUNT);
        assert_eq!(board, sample());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");
        let mut board = sample();
        let err = load_board(&path, &mut board).unwrap_err();
        assert!(matches!(err, PersistError::Open { .. }));
        assert_eq!(err.path(), path.as_path());
        assert_eq!(board, sample());
    }

    #[test]
    fn test_unwritable_path_is_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("data.bin");
        let err = save_board(&path, &sample()).unwrap_err();
        assert!(matches!(err, PersistError::Create { .. }));
        assert!(err.to_string().contains("for writing"));
    }
}
