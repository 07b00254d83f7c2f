mod align_edits;
pub mod char_diff;
mod myers;
pub mod raw_operation;
