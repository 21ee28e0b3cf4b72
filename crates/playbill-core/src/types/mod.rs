//! Core type definitions used across the Playbill workspace.

pub mod pagination;

pub use pagination::{PageMeta, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
