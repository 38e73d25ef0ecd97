//! Routes of the classification service.
//!
//! Create and update bodies are `WineSample` values; list, fetch and delete
//! carry no body.

use crate::model::wine::WineId;

/// Collection path for list and create.
pub const WINES_PATH: &str = "/vinhos";

/// Item path for fetch, update and delete.
pub fn wine_path(id: WineId) -> String {
    format!("{}/{}", WINES_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_the_id() {
        assert_eq!(wine_path(WineId(5)), "/vinhos/5");
    }
}
