pub mod fragment;
pub mod fragment_store;
pub mod json_fragments;
pub mod mirrored;
pub mod registry;
