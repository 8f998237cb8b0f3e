// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these sizes. A project picker usually shows a handful of
//! selected items and short slugs, so both fit on the stack. Larger collections are
//! [`smallvec::SmallVec::spilled`] on the heap transparently.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for small strings, like slugs and search keys. When
/// this gets larger than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
