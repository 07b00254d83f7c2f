pub mod detect_moves;
pub mod fold_replacements;
pub mod join_tokens;
pub mod tokenize_runs;
