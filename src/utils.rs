pub mod common_affix_len;
