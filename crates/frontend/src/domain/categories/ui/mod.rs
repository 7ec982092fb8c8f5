pub mod chips;
