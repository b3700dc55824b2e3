pub mod machine_output;
pub mod regex_cache;
