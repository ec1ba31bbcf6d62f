//! Shared serde default helpers for the configuration domains

pub fn default_true() -> bool {
    true
}
