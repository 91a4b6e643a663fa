/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use anyhow::{Context, anyhow};
use chrono::Utc;
use openssl::asn1::{Asn1Integer, Asn1Time};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::x509::extension::{BasicConstraints, ExtendedKeyUsage};
use openssl::x509::{X509, X509Builder, X509Extension, X509Ref};

use super::{SubjectNameBuilder, asn1_time_from_unix};

/// Template for an end-user client authentication certificate.
///
/// The validity window and serial number are fixed at construction time,
/// one builder instance describes exactly one certificate to be issued.
pub struct ClientCertBuilder {
    serial: Asn1Integer,
    basic_constraints: X509Extension,
    ext_key_usage: X509Extension,
    not_before: Asn1Time,
    not_after: Asn1Time,
    subject_builder: SubjectNameBuilder,
}

impl ClientCertBuilder {
    /// Create a template valid from now until now + `valid_days`,
    /// with a fresh random serial number.
    pub fn new(valid_days: u32) -> anyhow::Result<Self> {
        let serial = super::serial::random_128()?;

        let basic_constraints = BasicConstraints::new()
            .critical()
            .build()
            .map_err(|e| anyhow!("failed to build BasicConstraints extension: {e}"))?;

        let ext_key_usage = ExtendedKeyUsage::new()
            .client_auth()
            .build()
            .map_err(|e| anyhow!("failed to build ExtendedKeyUsage extension: {e}"))?;

        // both endpoints derive from the same captured timestamp so that
        // NotAfter - NotBefore is exactly valid_days to the second
        let time_now = Utc::now().timestamp();
        let time_after = time_now
            .checked_add(i64::from(valid_days) * 86400)
            .ok_or(anyhow!("unable to get time after date"))?;
        let not_before =
            asn1_time_from_unix(time_now).context("failed to get NotBefore time")?;
        let not_after =
            asn1_time_from_unix(time_after).context("failed to get NotAfter time")?;

        Ok(ClientCertBuilder {
            serial,
            basic_constraints,
            ext_key_usage,
            not_before,
            not_after,
            subject_builder: SubjectNameBuilder::default(),
        })
    }

    #[inline]
    pub fn subject_builder_mut(&mut self) -> &mut SubjectNameBuilder {
        &mut self.subject_builder
    }

    #[inline]
    pub fn subject_builder(&self) -> &SubjectNameBuilder {
        &self.subject_builder
    }

    pub fn set_serial(&mut self, serial: Asn1Integer) {
        self.serial = serial;
    }

    /// Sign a certificate for `pkey` with the CA key, the CA certificate
    /// becoming the issuer.
    pub fn build(
        &self,
        pkey: &PKey<Private>,
        ca_cert: &X509Ref,
        ca_key: &PKey<Private>,
        sign_digest: Option<MessageDigest>,
    ) -> anyhow::Result<X509> {
        let mut builder =
            X509Builder::new().map_err(|e| anyhow!("failed to create x509 builder: {e}"))?;
        builder
            .set_pubkey(pkey)
            .map_err(|e| anyhow!("failed to set pub key: {e}"))?;
        builder
            .set_serial_number(&self.serial)
            .map_err(|e| anyhow!("failed to set serial number: {e}"))?;

        builder
            .set_not_before(&self.not_before)
            .map_err(|e| anyhow!("failed to set NotBefore: {e}"))?;
        builder
            .set_not_after(&self.not_after)
            .map_err(|e| anyhow!("failed to set NotAfter: {e}"))?;

        builder
            .set_version(2)
            .map_err(|e| anyhow!("failed to set x509 version 3: {e}"))?;
        builder
            .append_extension2(&self.basic_constraints)
            .map_err(|e| anyhow!("failed to append BasicConstraints extension: {e}"))?;
        builder
            .append_extension2(&self.ext_key_usage)
            .map_err(|e| anyhow!("failed to append ExtendedKeyUsage extension: {e}"))?;

        let subject_name = self
            .subject_builder
            .build()
            .context("failed to build subject name")?;
        builder
            .set_subject_name(&subject_name)
            .map_err(|e| anyhow!("failed to set subject name: {e}"))?;

        builder
            .set_issuer_name(ca_cert.subject_name())
            .map_err(|e| anyhow!("failed to set issuer name: {e}"))?;

        let digest = sign_digest.unwrap_or_else(MessageDigest::sha256);
        builder
            .sign(ca_key, digest)
            .map_err(|e| anyhow!("failed to sign: {e}"))?;

        Ok(builder.build())
    }
}
