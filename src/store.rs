//! Note storage backed by sled.
//!
//! Two trees: `notes` maps a note path to its JSON record (content plus
//! metadata), `shares` maps the digest of a path back to the path. Every call
//! reads from or writes to sled directly; nothing is cached in-process.

use sha2::{Digest, Sha256};
use sled::transaction::{
    ConflictableTransactionError, ConflictableTransactionResult, Transactional, TransactionalTree,
};
use sled::{Db, Tree};

use crate::auth::hex_encode;
use crate::error::StoreError;
use crate::models::{Mode, Note, NoteLookup};

const NOTES_TREE: &str = "notes";
const SHARES_TREE: &str = "shares";

#[derive(Clone)]
pub struct NoteStore {
    notes: Tree,
    shares: Tree,
}

impl NoteStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Self::from_db(&db)
    }

    /// A throwaway database removed on drop.
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &Db) -> Result<Self, StoreError> {
        Ok(Self {
            notes: db.open_tree(NOTES_TREE)?,
            shares: db.open_tree(SHARES_TREE)?,
        })
    }

    // ========================================================================
    // Notes
    // ========================================================================

    pub fn query_note(&self, path: &str) -> Result<NoteLookup, StoreError> {
        let note = match self.notes.get(path.as_bytes())? {
            Some(bytes) => Some(serde_json::from_slice::<Note>(&bytes)?),
            None => None,
        };
        Ok(NoteLookup::from_note(note))
    }

    /// Read-modify-write of one note in a single transaction.
    fn modify_note<F>(&self, path: &str, change: F) -> Result<(), StoreError>
    where
        F: Fn(&mut Note),
    {
        self.notes.transaction(|notes| {
            let mut note = read_note(notes, path)?;
            change(&mut note);
            write_note(notes, path, &note)
        })?;
        Ok(())
    }

    /// Replace the content of a note and stamp `updateAt`. Other metadata is kept.
    pub fn put_content(&self, path: &str, content: &str, now: i64) -> Result<(), StoreError> {
        self.modify_note(path, |note| {
            note.value = content.to_string();
            note.metadata.update_at = Some(now);
        })?;
        tracing::debug!(path, bytes = content.len(), "note content saved");
        Ok(())
    }

    /// Set or clear the stored password hash. Content is kept.
    pub fn set_password(&self, path: &str, pw_hash: Option<String>) -> Result<(), StoreError> {
        self.modify_note(path, |note| note.metadata.pw = pw_hash.clone())
    }

    /// Merge `mode`/`share` into the note's metadata. When `share` is present
    /// the share record is written or removed in the same transaction.
    ///
    /// Returns the share hash when sharing was switched on.
    pub fn update_settings(
        &self,
        path: &str,
        mode: Option<Mode>,
        share: Option<bool>,
    ) -> Result<Option<String>, StoreError> {
        let hash = share_hash(path);

        (&self.notes, &self.shares).transaction(|(notes, shares)| {
            let mut note = read_note(notes, path)?;
            if mode.is_some() {
                note.metadata.mode = mode;
            }
            if share.is_some() {
                note.metadata.share = share;
            }
            write_note(notes, path, &note)?;

            match share {
                Some(true) => {
                    shares.insert(hash.as_bytes(), path.as_bytes())?;
                }
                Some(false) => {
                    shares.remove(hash.as_bytes())?;
                }
                None => {}
            }
            Ok::<_, ConflictableTransactionError<serde_json::Error>>(())
        })?;

        Ok(match share {
            Some(true) => Some(hash),
            _ => None,
        })
    }

    // ========================================================================
    // Share Index
    // ========================================================================

    /// Resolve a share hash to the note path it was issued for.
    pub fn lookup_share(&self, hash: &str) -> Result<Option<String>, StoreError> {
        match self.shares.get(hash.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StoreError::InvalidPath),
            None => Ok(None),
        }
    }
}

// ============================================================================
// Transaction Helpers
// ============================================================================

type TxResult<T> = ConflictableTransactionResult<T, serde_json::Error>;

/// A missing record reads as an empty note.
fn read_note(notes: &TransactionalTree, path: &str) -> TxResult<Note> {
    match notes.get(path.as_bytes())? {
        Some(bytes) => serde_json::from_slice(&bytes).map_err(ConflictableTransactionError::Abort),
        None => Ok(Note::default()),
    }
}

fn write_note(notes: &TransactionalTree, path: &str, note: &Note) -> TxResult<()> {
    let bytes = serde_json::to_vec(note).map_err(ConflictableTransactionError::Abort)?;
    notes.insert(path.as_bytes(), bytes)?;
    Ok(())
}

/// Stable digest of a note path used as its public share key.
pub fn share_hash(path: &str) -> String {
    hex_encode(&Sha256::digest(path.as_bytes()))
}
