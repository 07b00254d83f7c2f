pub mod coordinate;
pub mod edit_operation;
pub mod hint;
pub mod location;
pub mod patch_op;
