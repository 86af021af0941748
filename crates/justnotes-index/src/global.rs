//! Process-wide content index
//!
//! Installed once at startup and shared read-only afterwards. There is no
//! way to replace or mutate it once set.

use crate::error::IndexError;
use crate::model::ContentIndex;
use once_cell::sync::OnceCell;

static GLOBAL_INDEX: OnceCell<ContentIndex> = OnceCell::new();

/// Install the process-wide index
///
/// # Errors
/// Returns [`IndexError::AlreadyInitialized`] if an index was installed before
pub fn init_global(index: ContentIndex) -> Result<&'static ContentIndex, IndexError> {
    GLOBAL_INDEX
        .set(index)
        .map_err(|_| IndexError::AlreadyInitialized)?;
    tracing::debug!("global content index installed");
    global().ok_or(IndexError::AlreadyInitialized)
}

/// The process-wide index, if installed
#[inline]
#[must_use]
pub fn global() -> Option<&'static ContentIndex> {
    GLOBAL_INDEX.get()
}
