/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use log::{info, warn};

use crate::builder::{self, ClientCertBuilder};
use crate::{IssueError, sanitize};

mod config;
pub use config::{DEFAULT_ORGANIZATION, IssuerConfig};

mod source;
pub use source::{CaMaterial, CaSource, FileCaSource, StaticCaSource};

/// Key size for freshly generated subject key pairs.
pub const RSA_KEY_BITS: u32 = 2048;

/// Issues CA signed client authentication certificates for end users.
///
/// Stateless across calls, a single issuer may be shared between
/// threads and each call loads CA material independently.
pub struct CertIssuer<S: CaSource> {
    config: IssuerConfig,
    source: S,
}

impl<S: CaSource> CertIssuer<S> {
    pub fn new(config: IssuerConfig, source: S) -> Self {
        CertIssuer { config, source }
    }

    #[inline]
    pub fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Issue a new client certificate for `username`.
    ///
    /// On success the returned bytes hold exactly two PEM blocks, the
    /// signed `CERTIFICATE` immediately followed by the matching
    /// `RSA PRIVATE KEY` in PKCS#1 form. The private key exists nowhere
    /// else, the issuer keeps no copy.
    pub fn issue_client_cert(&self, username: &str) -> Result<Vec<u8>, IssueError> {
        let r = self.issue(username);
        if let Err(e) = &r {
            warn!(
                "issue_client_cert failed for user '{}': {e}",
                sanitize::log_str(username)
            );
        }
        r
    }

    fn issue(&self, username: &str) -> Result<Vec<u8>, IssueError> {
        let mut template =
            ClientCertBuilder::new(self.config.valid_days()).map_err(IssueError::Signing)?;
        template
            .subject_builder_mut()
            .set_organization(self.config.organization().to_string());
        template
            .subject_builder_mut()
            .set_common_name(self.config.subject_email(username));

        let ca = self.source.load()?;

        let pkey = builder::pkey::new_rsa(RSA_KEY_BITS).map_err(IssueError::KeyGen)?;

        let cert = template
            .build(&pkey, ca.cert(), ca.key(), None)
            .map_err(IssueError::Signing)?;

        let mut bundle = cert.to_pem().map_err(IssueError::OutputEncoding)?;
        let key_pem = pkey
            .rsa()
            .map_err(IssueError::OutputEncoding)?
            .private_key_to_pem()
            .map_err(IssueError::OutputEncoding)?;
        bundle.extend_from_slice(&key_pem);

        info!(
            "new client certificate issued for user '{}'",
            sanitize::log_str(username)
        );
        Ok(bundle)
    }
}
