/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use anyhow::anyhow;
use openssl::asn1::Asn1Time;

pub(super) fn asn1_time_from_unix(t: i64) -> anyhow::Result<Asn1Time> {
    Asn1Time::from_unix(t).map_err(|e| anyhow!("failed to get asn1 time: {e}"))
}
