pub mod app_loop;
pub mod board_view;
pub mod hud_text;
pub mod mesh_table;
pub mod seed;

pub const APP_NAME: &str = "Goop Slide";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
