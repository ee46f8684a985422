//! Endpoint paths of the ficha API, relative to the configured base URL.

use rpgficha_domain::FichaId;

/// Resource name of the ficha collection.
pub const FICHA_RESOURCE: &str = "rpgficha";

/// `/rpgficha` - create.
pub fn ficha_collection_path() -> String {
    format!("/{}", FICHA_RESOURCE)
}

/// `/rpgficha/{id}` - fetch and update.
pub fn ficha_path(id: FichaId) -> String {
    format!("/{}/{}", FICHA_RESOURCE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(ficha_collection_path(), "/rpgficha");
        let id: FichaId = "437d77bd-d4a2-4ff6-b4ed-f320fcfaa2ab".parse().unwrap();
        assert_eq!(
            ficha_path(id),
            "/rpgficha/437d77bd-d4a2-4ff6-b4ed-f320fcfaa2ab"
        );
    }
}
