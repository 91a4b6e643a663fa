/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

pub(crate) mod pkey;
mod serial;

mod subject;
pub use subject::SubjectNameBuilder;

mod time;
use time::asn1_time_from_unix;

mod client;
pub use client::ClientCertBuilder;

mod root;
pub use root::RootCertBuilder;
