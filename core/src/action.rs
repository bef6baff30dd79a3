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

//! Action registry
//!
//! Redfish lists the operations a resource supports under `Actions`:
//!
//! ```json
//! "Actions": {
//!     "#Chassis.Reset": {
//!         "target": "/redfish/v1/Chassis/1/Actions/Chassis.Reset",
//!         "ResetType@Redfish.AllowableValues": ["On", "ForceOff"]
//!     },
//!     "Oem": {}
//! }
//! ```
//!
//! [`Actions`] keeps one [`Action`] per `#`-prefixed key, stored without
//! the `#`. An action is supported when its target is not empty.
//! [`Entity::run_action`] checks support and allowed values before
//! anything is sent, so a rejected call never reaches the BMC.

use crate::entity::Entity;
use crate::Bmc;
use crate::Error;
use crate::ODataId;
use crate::Oem;
use crate::Response;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::de::Deserializer;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use tracing::debug;

const ALLOWABLE_VALUES_SUFFIX: &str = "@Redfish.AllowableValues";

/// Type for `target` field of Action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ActionTarget(String);

impl ActionTarget {
    /// Target URI.
    #[must_use]
    pub const fn new(v: String) -> Self {
        Self(v)
    }

    /// Target as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no target was advertised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ActionTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Descriptor of a single action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    target: ActionTarget,
    title: Option<String>,
    action_info: Option<ODataId>,
    allowable_values: BTreeMap<String, Vec<String>>,
}

impl Action {
    /// URI to POST to.
    #[must_use]
    pub const fn target(&self) -> &ActionTarget {
        &self.target
    }

    /// True when the BMC advertised a target.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.target.is_empty()
    }

    /// `title` of the action.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// `@Redfish.ActionInfo` URI describing the parameters.
    #[must_use]
    pub const fn action_info(&self) -> Option<&ODataId> {
        self.action_info.as_ref()
    }

    /// Values advertised for `parameter`. `None` when the BMC did not
    /// advertise a list or advertised an empty one.
    #[must_use]
    pub fn allowable_values(&self, parameter: &str) -> Option<&[String]> {
        self.allowable_values
            .get(parameter)
            .map(Vec::as_slice)
            .filter(|values| !values.is_empty())
    }

    /// Check every supplied parameter against advertised values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for the first value that is not
    /// advertised.
    pub fn validate<B: Bmc>(&self, name: &str, params: &JsonValue) -> Result<(), Error<B>> {
        let Some(params) = params.as_object() else {
            return Ok(());
        };
        for (parameter, value) in params {
            let Some(allowed) = self.allowable_values(parameter) else {
                continue;
            };
            let supplied = match value {
                JsonValue::Array(items) => items.iter().filter_map(scalar).collect(),
                other => scalar(other).into_iter().collect::<Vec<_>>(),
            };
            if let Some(value) = supplied.into_iter().find(|v| !allowed.contains(v)) {
                return Err(Error::InvalidParameter {
                    action: name.to_string(),
                    parameter: parameter.clone(),
                    value,
                    allowed: allowed.to_vec(),
                });
            }
        }
        Ok(())
    }

    fn from_json(v: &JsonValue) -> Self {
        let Some(obj) = v.as_object() else {
            return Self::default();
        };
        let allowable_values = obj
            .iter()
            .filter_map(|(key, values)| {
                key.strip_suffix(ALLOWABLE_VALUES_SUFFIX).map(|parameter| {
                    let values = values
                        .as_array()
                        .map(|items| items.iter().filter_map(scalar).collect())
                        .unwrap_or_default();
                    (parameter.to_string(), values)
                })
            })
            .collect();
        Self {
            target: ActionTarget(string_field(obj, "target").unwrap_or_default()),
            title: string_field(obj, "title"),
            action_info: string_field(obj, "@Redfish.ActionInfo").map(ODataId::from),
            allowable_values,
        }
    }
}

fn string_field(obj: &JsonMap<String, JsonValue>, key: &str) -> Option<String> {
    obj.get(key).and_then(JsonValue::as_str).map(ToString::to_string)
}

fn scalar(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(|v| Self::from_json(&v))
    }
}

/// Actions advertised by a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actions {
    actions: BTreeMap<String, Action>,
    oem: Option<Oem>,
}

impl Actions {
    /// Descriptor of the action `name` (without `#`, e.g. `Chassis.Reset`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    /// True when `name` is advertised with a target.
    #[must_use]
    pub fn supports(&self, name: &str) -> bool {
        self.get(name).is_some_and(Action::is_supported)
    }

    /// Names of advertised actions.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Vendor specific actions, uninterpreted.
    #[must_use]
    pub const fn oem(&self) -> Option<&Oem> {
        self.oem.as_ref()
    }
}

impl<'de> Deserialize<'de> for Actions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        let mut actions = Self::default();
        let JsonValue::Object(obj) = value else {
            return Ok(actions);
        };
        for (key, v) in obj {
            if key == "Oem" {
                actions.oem = serde_json::from_value(v).ok();
            } else if let Some(name) = key.strip_prefix('#') {
                actions.actions.insert(name.to_string(), Action::from_json(&v));
            }
        }
        Ok(actions)
    }
}

impl<B: Bmc> Entity<B> {
    /// Invoke action `name` with `params` as JSON body.
    ///
    /// `params` serializing to `null` sends no body; use
    /// [`crate::Empty`] for actions that expect `{}`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if the action is not advertised or
    ///   has no target;
    /// - [`Error::InvalidParameter`] if a value is outside the advertised
    ///   list;
    /// - transport error or [`Error::Remote`] from the POST.
    pub async fn run_action<P: Serialize + ?Sized>(
        &self,
        actions: &Actions,
        name: &str,
        params: &P,
    ) -> Result<Response, Error<B>> {
        let action = actions
            .get(name)
            .filter(|action| action.is_supported())
            .ok_or_else(|| Error::UnsupportedAction {
                action: name.to_string(),
            })?;
        let body = serde_json::to_value(params).map_err(Error::Json)?;
        action.validate::<B>(name, &body)?;
        debug!("{} {name}", self.odata_id());
        self.post(action.target().as_str(), &body).await
    }
}
