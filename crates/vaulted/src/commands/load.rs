// SPDX-FileCopyrightText: 2026 Vaulted Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Read;

use vaulted_core::{Store, Vault, VaultedError};

/// Seal a JSON-encoded [`Vault`] read from `input`.
pub fn run(store: &dyn Store, name: &str, input: &mut dyn Read) -> Result<(), VaultedError> {
    let vault: Vault = serde_json::from_reader(input)?;
    store.seal_vault(&vault, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaulted_test_utils::MemoryStore;

    #[test]
    fn loads_json_vault() {
        let store = MemoryStore::new();
        let json = r#"{"vars":{"A":"1"},"aws_key":{"id":"AKIA","secret":"s"},"duration":900}"#;

        run(&store, "loaded", &mut json.as_bytes()).unwrap();

        let vault = store.vault("loaded").unwrap();
        assert_eq!(vault.vars["A"], "1");
        assert_eq!(vault.aws_key.unwrap().id, "AKIA");
        assert_eq!(vault.duration.as_secs(), 900);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let store = MemoryStore::new();
        let err = run(&store, "bad", &mut "{".as_bytes()).unwrap_err();
        assert!(matches!(err, VaultedError::Serialization(_)));
        assert!(!store.contains("bad"));
    }
}
