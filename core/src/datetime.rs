// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `Edm.DateTimeOffset` values
//!
//! Redfish carries timestamps (for example `Manager.DateTime`) as RFC 3339
//! strings. [`DateTimeOffset`] wraps [`time::OffsetDateTime`] and keeps the
//! offset the BMC reported. A UTC offset is written back as `Z`.
//!
//! ```rust
//! use typed_redfish_core::DateTimeOffset;
//!
//! let v: DateTimeOffset = "2025-01-02T03:04:05+02:00".parse().unwrap();
//! assert_eq!(v.to_string(), "2025-01-02T03:04:05+02:00");
//! ```

use core::str::FromStr;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Type corresponding to `Edm.DateTimeOffset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTimeOffset(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl DateTimeOffset {
    /// Underlying timestamp.
    #[must_use]
    pub const fn inner(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for DateTimeOffset {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

impl From<DateTimeOffset> for OffsetDateTime {
    fn from(v: DateTimeOffset) -> Self {
        v.0
    }
}

impl Display for DateTimeOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = self.0.format(&Rfc3339).map_err(|_| FmtError)?;
        f.write_str(&s)
    }
}

impl FromStr for DateTimeOffset {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OffsetDateTime::parse(s, &Rfc3339).map(Self)
    }
}
