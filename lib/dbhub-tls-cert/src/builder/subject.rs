/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use anyhow::anyhow;
use openssl::nid::Nid;
use openssl::x509::X509Name;

#[derive(Default)]
pub struct SubjectNameBuilder {
    organization: Option<String>,
    common_name: Option<String>,
}

impl SubjectNameBuilder {
    pub fn set_organization(&mut self, o: String) {
        self.organization = Some(o);
    }

    pub fn set_common_name(&mut self, cn: String) {
        self.common_name = Some(cn);
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn build(&self) -> anyhow::Result<X509Name> {
        let mut builder = X509Name::builder()
            .map_err(|e| anyhow!("failed to create x509 subject name builder: {e}"))?;
        if let Some(o) = &self.organization {
            builder
                .append_entry_by_nid(Nid::ORGANIZATIONNAME, o)
                .map_err(|e| anyhow!("failed to set organization name to {o}: {e}"))?;
        }
        if let Some(cn) = &self.common_name {
            builder
                .append_entry_by_nid(Nid::COMMONNAME, cn)
                .map_err(|e| anyhow!("failed to set common name to {cn}: {e}"))?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openssl::nid::Nid;

    #[test]
    fn build_with_organization_and_common_name() {
        let mut builder = SubjectNameBuilder::default();
        builder.set_organization("DB Browser for SQLite".to_string());
        builder.set_common_name("alice@dbhub.io".to_string());
        assert_eq!(builder.common_name(), Some("alice@dbhub.io"));

        let name = builder.build().unwrap();
        let cn = name
            .entries_by_nid(Nid::COMMONNAME)
            .next()
            .unwrap()
            .data()
            .as_utf8()
            .unwrap();
        assert_eq!(cn.to_string(), "alice@dbhub.io");
        let o = name
            .entries_by_nid(Nid::ORGANIZATIONNAME)
            .next()
            .unwrap()
            .data()
            .as_utf8()
            .unwrap();
        assert_eq!(o.to_string(), "DB Browser for SQLite");
    }

    #[test]
    fn build_empty() {
        let builder = SubjectNameBuilder::default();
        let name = builder.build().unwrap();
        assert!(name.entries().next().is_none());
    }
}
