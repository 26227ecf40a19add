//! Binary data carried across the bridge boundary.
//!
//! Binary extraction returns either a **borrowed view** aliasing
//! engine-owned memory, or an **owned copy** with independent storage. The
//! distinction is kept visible in the [`Binary`] result type because callers
//! must know whether the bytes may be retained past the current call.
//!
//! # Invariant
//!
//! Every binary result has a non-null base pointer, even at length zero, so
//! downstream code may dereference the base without an emptiness check. Empty
//! results substitute a well-aligned dangling address.

use std::marker::PhantomData;
use std::ptr::NonNull;

// ============================================================================
// BinaryView
// ============================================================================

/// Borrowed view over engine-owned bytes.
///
/// Valid only while the source host value is alive and its storage has not
/// been relocated or resized; the lifetime parameter ties the view to the
/// borrow of the source handle.
#[derive(Clone, Copy)]
pub struct BinaryView<'a> {
    ptr: NonNull<u8>,
    len: usize,
    _source: PhantomData<&'a [u8]>,
}

impl<'a> BinaryView<'a> {
    /// Create a view over a byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        // Slice pointers are non-null even for empty slices.
        let ptr = NonNull::new(bytes.as_ptr() as *mut u8).unwrap_or(NonNull::dangling());
        Self {
            ptr,
            len: bytes.len(),
            _source: PhantomData,
        }
    }

    /// Create a view from a raw base pointer and length.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `len` byte reads for the lifetime `'a`. A
    /// zero-length view may use a dangling (but non-null, aligned) pointer.
    pub unsafe fn from_raw_parts(ptr: NonNull<u8>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _source: PhantomData,
        }
    }

    /// Base pointer of the viewed bytes. Never null, even at length zero.
    pub fn as_ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed bytes as a slice.
    ///
    /// # Safety
    ///
    /// The viewed storage must not be written through any other path while
    /// the returned slice is live. Engine storage may be mutable through
    /// other handles; use [`to_vec`](BinaryView::to_vec) or
    /// [`to_owned_binary`](BinaryView::to_owned_binary) for a safe read.
    pub unsafe fn as_bytes(&self) -> &'a [u8] {
        if self.len == 0 {
            &[]
        } else {
            std::slice::from_raw_parts(self.ptr.as_ptr(), self.len)
        }
    }

    /// Copy the viewed bytes out through the raw base pointer.
    ///
    /// Safe even when the storage is engine-mutable: no reference to the
    /// source bytes is formed, and the engine cannot write during the copy
    /// on its own single thread.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.len];
        if self.len > 0 {
            // Raw-pointer read; validity for len bytes is upheld by `new` /
            // the `from_raw_parts` contract.
            unsafe {
                std::ptr::copy_nonoverlapping(self.ptr.as_ptr(), out.as_mut_ptr(), self.len);
            }
        }
        out
    }

    /// Copy the viewed bytes into independent storage.
    pub fn to_owned_binary(&self) -> OwnedBinary {
        OwnedBinary::from_vec(self.to_vec())
    }
}

impl std::fmt::Debug for BinaryView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryView")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

// ============================================================================
// OwnedBinary
// ============================================================================

/// Bridge-allocated copy of binary data, valid independent of its source.
///
/// Storage is released when the value is dropped; transfer out with
/// [`OwnedBinary::into_vec`] to hand ownership to a caller-owned container.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnedBinary {
    data: Box<[u8]>,
}

impl OwnedBinary {
    /// Take ownership of an existing byte vector.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Copy a byte slice into fresh storage.
    pub fn from_slice(data: &[u8]) -> Self {
        Self { data: data.into() }
    }

    /// Base pointer of the owned bytes. Never null, even at length zero.
    pub fn as_ptr(&self) -> NonNull<u8> {
        NonNull::new(self.data.as_ptr() as *mut u8).unwrap_or(NonNull::dangling())
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The owned bytes as a slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Transfer the bytes into a `Vec<u8>`
    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

impl From<Vec<u8>> for OwnedBinary {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[u8]> for OwnedBinary {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl AsRef<[u8]> for OwnedBinary {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for OwnedBinary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBinary").field("len", &self.len()).finish()
    }
}

// ============================================================================
// Binary
// ============================================================================

/// Result of a binary extraction: borrowed or owned, tagged.
///
/// Borrowed results alias engine memory and die with the source handle;
/// owned results may be retained freely.
#[derive(Debug)]
pub enum Binary<'a> {
    /// Zero-copy view over engine-owned storage
    Borrowed(BinaryView<'a>),
    /// Independent copy allocated by the bridge
    Owned(OwnedBinary),
}

impl<'a> Binary<'a> {
    /// Base pointer of the bytes. Never null, even at length zero.
    pub fn as_ptr(&self) -> NonNull<u8> {
        match self {
            Binary::Borrowed(view) => view.as_ptr(),
            Binary::Owned(owned) => owned.as_ptr(),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        match self {
            Binary::Borrowed(view) => view.len(),
            Binary::Owned(owned) => owned.len(),
        }
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes as a slice.
    ///
    /// # Safety
    ///
    /// For a borrowed result the source storage must not be written through
    /// any other path while the slice is live (see
    /// [`BinaryView::as_bytes`]); for an owned result there is no
    /// precondition. Use [`to_vec`](Binary::to_vec) for a safe read.
    pub unsafe fn as_bytes(&self) -> &[u8] {
        match self {
            Binary::Borrowed(view) => view.as_bytes(),
            Binary::Owned(owned) => owned.as_bytes(),
        }
    }

    /// Copy the bytes into a fresh `Vec<u8>`. Always safe; borrowed results
    /// are read through the raw base pointer without forming a reference to
    /// the source storage.
    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            Binary::Borrowed(view) => view.to_vec(),
            Binary::Owned(owned) => owned.as_bytes().to_vec(),
        }
    }

    /// Whether this result borrows engine memory
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Binary::Borrowed(_))
    }

    /// Whether this result owns its storage
    pub fn is_owned(&self) -> bool {
        matches!(self, Binary::Owned(_))
    }

    /// Convert into an owned copy, copying only if currently borrowed.
    pub fn into_owned(self) -> OwnedBinary {
        match self {
            Binary::Borrowed(view) => view.to_owned_binary(),
            Binary::Owned(owned) => owned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_over_slice() {
        let bytes = [1u8, 2, 3, 4];
        let view = BinaryView::new(&bytes);
        assert_eq!(view.len(), 4);
        assert_eq!(view.to_vec(), vec![1, 2, 3, 4]);
        // Source is a plain immutable slice, so the slice read is allowed.
        assert_eq!(unsafe { view.as_bytes() }, &[1, 2, 3, 4]);
        assert_eq!(view.as_ptr().as_ptr() as *const u8, bytes.as_ptr());
    }

    #[test]
    fn test_empty_view_non_null() {
        let view = BinaryView::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(!view.as_ptr().as_ptr().is_null());
        assert_eq!(view.to_vec(), Vec::<u8>::new());
    }

    #[test]
    fn test_owned_from_vec_roundtrip() {
        let owned = OwnedBinary::from_vec(vec![9, 8, 7]);
        assert_eq!(owned.as_bytes(), &[9, 8, 7]);
        assert_eq!(owned.into_vec(), vec![9, 8, 7]);
    }

    #[test]
    fn test_empty_owned_non_null() {
        let owned = OwnedBinary::from_slice(&[]);
        assert!(owned.is_empty());
        assert!(!owned.as_ptr().as_ptr().is_null());
    }

    #[test]
    fn test_view_to_owned_is_independent() {
        let mut bytes = vec![1u8, 2, 3];
        let owned = BinaryView::new(&bytes).to_owned_binary();
        bytes[0] = 99;
        assert_eq!(owned.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_binary_tag_preserved() {
        let bytes = [5u8, 6];
        let borrowed = Binary::Borrowed(BinaryView::new(&bytes));
        assert!(borrowed.is_borrowed());
        assert!(!borrowed.is_owned());
        assert_eq!(borrowed.to_vec(), vec![5, 6]);

        let owned = Binary::Owned(OwnedBinary::from_slice(&bytes));
        assert!(owned.is_owned());
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_into_owned_copies_borrowed() {
        let bytes = [1u8, 2, 3];
        let owned = Binary::Borrowed(BinaryView::new(&bytes)).into_owned();
        assert_eq!(owned.as_bytes(), &[1, 2, 3]);
    }
}
