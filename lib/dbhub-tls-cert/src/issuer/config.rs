/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use anyhow::anyhow;

/// Subject Organization used when the caller does not set one.
pub const DEFAULT_ORGANIZATION: &str = "DB Browser for SQLite";

/// Static parameters of the certificate issuer, passed in explicitly
/// instead of read from process wide state.
#[derive(Clone, Debug)]
pub struct IssuerConfig {
    realm: String,
    valid_days: u32,
    organization: String,
}

impl IssuerConfig {
    pub fn new(realm: impl Into<String>, valid_days: u32) -> anyhow::Result<Self> {
        let realm = realm.into();
        if realm.is_empty() {
            return Err(anyhow!("realm may not be empty"));
        }
        if valid_days == 0 {
            return Err(anyhow!("certificate validity days should be greater than 0"));
        }
        Ok(IssuerConfig {
            realm,
            valid_days,
            organization: DEFAULT_ORGANIZATION.to_string(),
        })
    }

    pub fn set_organization(&mut self, o: String) {
        self.organization = o;
    }

    #[inline]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    #[inline]
    pub fn valid_days(&self) -> u32 {
        self.valid_days
    }

    #[inline]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// The email style Common Name for a user of this realm.
    pub fn subject_email(&self, username: &str) -> String {
        format!("{username}@{}", self.realm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let config = IssuerConfig::new("dbhub.io", 7).unwrap();
        assert_eq!(config.realm(), "dbhub.io");
        assert_eq!(config.valid_days(), 7);
        assert_eq!(config.organization(), DEFAULT_ORGANIZATION);
        assert_eq!(config.subject_email("alice"), "alice@dbhub.io");
    }

    #[test]
    fn invalid_config() {
        assert!(IssuerConfig::new("", 7).is_err());
        assert!(IssuerConfig::new("dbhub.io", 0).is_err());
    }
}
