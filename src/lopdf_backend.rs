use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use lopdf::encryption::DecryptionError;
use lopdf::xref::XrefEntry;
use lopdf::{Object, ObjectId, Reader};
use tracing::{debug, trace, warn};

use crate::document::Document;
use crate::error::ExtractError;

/// A [`Document`] backed by a parsed [`lopdf::Document`].
pub struct LopdfDocument {
    inner: lopdf::Document,
    // Ascending page numbers as reported by the page tree.
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    /// Parse the PDF file at `path`.
    pub fn load<P: AsRef<Path>>(path: P, password: Option<&str>) -> Result<Self, ExtractError> {
        let bytes = fs::read(path)?;
        Self::load_mem(&bytes, password)
    }

    /// Parse a PDF held in memory.
    ///
    /// Documents encrypted with an empty user password open without one.
    /// Any other encrypted document needs its user password; lopdf derives
    /// the file key from the user password only.
    pub fn load_mem(bytes: &[u8], password: Option<&str>) -> Result<Self, ExtractError> {
        let mut inner = lopdf::Document::load_mem(bytes)?;

        // The loader decrypts in place when the empty password authenticates,
        // and otherwise keeps nothing but the encryption dictionary.
        if inner.trailer.get(b"Encrypt").is_ok() && inner.encryption_state.is_none() {
            let Some(password) = password else {
                return Err(ExtractError::PasswordRequired);
            };
            match inner.authenticate_user_password(password) {
                Ok(()) => {}
                Err(lopdf::Error::Decryption(DecryptionError::IncorrectPassword)) => {
                    return Err(ExtractError::IncorrectPassword);
                }
                Err(e) => return Err(e.into()),
            }
            inner = read_encrypted_objects(bytes, inner)?;
            inner.decrypt(password)?;
        } else if inner.encryption_state.is_some() {
            debug!("document opened with the empty user password");
        }

        Ok(Self::new(inner))
    }

    /// Read a reader to the end and parse the result.
    pub fn from_reader<R: Read>(
        mut reader: R,
        password: Option<&str>,
    ) -> Result<Self, ExtractError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::load_mem(&bytes, password)
    }

    fn new(inner: lopdf::Document) -> Self {
        // BTreeMap keys, so already ascending.
        let page_numbers: Vec<u32> = inner.get_pages().keys().copied().collect();
        debug!(pages = page_numbers.len(), version = %inner.version, "parsed document");

        LopdfDocument {
            inner,
            page_numbers,
        }
    }
}

/// Fill `shell`, as returned by the loader for a document it could not
/// decrypt, with every object still in its encrypted form.
fn read_encrypted_objects(
    bytes: &[u8],
    shell: lopdf::Document,
) -> Result<lopdf::Document, ExtractError> {
    // Xref offsets count from the header, as in the loader.
    let start = bytes.windows(5).position(|w| w == b"%PDF-").unwrap_or(0);
    let encrypt_id = shell.trailer.get(b"Encrypt").and_then(Object::as_reference)?;

    let ids: Vec<ObjectId> = shell
        .reference_table
        .entries
        .iter()
        .filter_map(|(&number, entry)| match *entry {
            XrefEntry::Normal { generation, .. } => Some((number, generation)),
            _ => None,
        })
        .filter(|&id| id != encrypt_id)
        .collect();

    let mut reader = Reader {
        buffer: &bytes[start..],
        document: shell,
        encryption_state: None,
        raw_objects: BTreeMap::new(),
    };
    for id in ids {
        match reader.get_object(id, &mut HashSet::new()) {
            Ok(object) => {
                reader.document.objects.insert(id, object);
            }
            Err(e) => warn!(object = ?id, "skipping unreadable object: {}", e),
        }
    }

    Ok(reader.document)
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

impl Document for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let page = *self
            .page_numbers
            .get(index)
            .ok_or(ExtractError::PageOutOfRange {
                index,
                count: self.page_numbers.len(),
            })?;

        let text = self
            .inner
            .extract_text(&[page])
            .map_err(|source| ExtractError::PageError { page, source })?;
        trace!(page, len = text.len(), "extracted page text");
        Ok(text)
    }
}
