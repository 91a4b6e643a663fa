/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

pub mod builder;
pub mod issuer;
pub mod sanitize;

mod error;
pub use error::IssueError;
