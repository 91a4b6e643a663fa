/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use std::io;
use std::path::PathBuf;

use openssl::error::ErrorStack;
use thiserror::Error;

/// Failure of a single certificate issuance call.
///
/// None of these are fatal to the process, each one aborts only the call
/// that produced it. Retrying, if wanted, is up to the caller.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("failed to read CA material file {path}: {source}")]
    ConfigLoad { path: PathBuf, source: io::Error },
    #[error("no PEM block found in {0}")]
    Encoding(&'static str),
    #[error("failed to parse CA certificate: {0}")]
    CertParse(ErrorStack),
    #[error("failed to parse CA private key: {0}")]
    KeyParse(ErrorStack),
    #[error("failed to generate subject key pair: {0}")]
    KeyGen(#[source] anyhow::Error),
    #[error("failed to sign client certificate: {0}")]
    Signing(#[source] anyhow::Error),
    #[error("failed to PEM encode output bundle: {0}")]
    OutputEncoding(ErrorStack),
}
