//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (views, sort/filter state, UI state)
//! - `character`: Catalog wire types
//! - `catalog_client`: Catalog API client
//! - `pipeline`: Pure filter/sort derivations
//! - `debounce`: Query debouncing
//! - `sequence`: Request sequencing (latest issued request wins)
//! - `navigator`: Cyclic detail traversal
//! - `content`: Per-view state
//! - `app_model`: Main application model with state management methods

mod types;
mod character;
mod catalog_client;
mod pipeline;
mod debounce;
mod sequence;
mod navigator;
mod content;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveView, FilterState, GalleryFilters, GalleryPredicate, SortKey, SortOrder, UiState};

pub use character::{Character, ResourceList};
#[cfg(test)]
pub(crate) use character::fixtures;

pub use catalog_client::{CatalogClient, CatalogError, ListParams, OrderBy};

pub use debounce::{Debouncer, QUERY_DEBOUNCE};

pub use navigator::{Anchor, Navigator};

pub use content::{
    DetailFetch, DetailState, GalleryState, ListState,
    GALLERY_PAGE_SIZE, LIST_PAGE_SIZE, NAVIGATION_PAGE_SIZE,
};

pub use app_model::AppModel;
