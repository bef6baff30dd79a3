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

//! Properties shared by Redfish resources

use serde::Deserialize;
use serde::Serialize;
use tagged_types::TaggedType;
use typed_redfish_core::Bmc;
use typed_redfish_core::Resource as CoreResource;

/// Redfish resource identifier.
pub type ResourceId = TaggedType<String, ResourceIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ResourceIdTag {}

/// Redfish resource name.
pub type ResourceName = TaggedType<String, ResourceNameTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ResourceNameTag {}

/// Redfish resource description.
pub type ResourceDescription = TaggedType<String, ResourceDescriptionTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access)]
pub enum ResourceDescriptionTag {}

/// Identity accessors available on every resource handle.
pub trait Resource<B: Bmc>: CoreResource<B> {
    /// Identifier of the resource (`Id`).
    fn id(&self) -> ResourceId {
        ResourceId::new(self.entity().id().to_string())
    }

    /// Name of the resource (`Name`).
    fn name(&self) -> ResourceName {
        ResourceName::new(self.entity().name().to_string())
    }

    /// Description of the resource.
    fn description(&self) -> Option<ResourceDescription> {
        self.entity()
            .description()
            .map(|v| ResourceDescription::new(v.to_string()))
    }
}

impl<B: Bmc, T: CoreResource<B>> Resource<B> for T {}

/// The status and health of a resource and its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    /// The state of the resource.
    pub state: Option<State>,
    /// The health state of this resource in the absence of its dependent resources.
    pub health: Option<Health>,
    /// The overall health state from the view of this resource.
    pub health_rollup: Option<Health>,
}

/// Known state of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Enabled,
    Disabled,
    InTest,
    StandbyOffline,
    StandbySpare,
    Absent,
    UnavailableOffline,
    Deferred,
    Quiesced,
    Starting,
    Updating,
    #[serde(other)]
    Unknown,
}

/// Health of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Health {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Reset types of `#<Type>.Reset` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulShutdown,
    GracefulRestart,
    ForceRestart,
    Nmi,
    ForceOn,
    PushPowerButton,
    PowerCycle,
    Suspend,
    Pause,
    Resume,
    FullPowerCycle,
}

/// Body of the `#<Type>.Reset` actions.
#[allow(dead_code)] // used if any feature enabled.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ResetParams {
    pub reset_type: ResetType,
}

/// Power state of a chassis or system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    Paused,
    #[serde(other)]
    Unknown,
}

/// State of the indicator LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorLed {
    Lit,
    Blinking,
    Off,
    #[serde(other)]
    Unknown,
}

/// Implements `Deref`/`DerefMut` from a resource handle to its public
/// properties, `Debug` and the `entity()`/`entity_mut()` accessors.
macro_rules! resource_handle {
    ($handle:ident, $properties:ident) => {
        impl<B: typed_redfish_core::Bmc> ::core::ops::Deref for $handle<B> {
            type Target = $properties;

            fn deref(&self) -> &Self::Target {
                &self.properties
            }
        }

        impl<B: typed_redfish_core::Bmc> ::core::ops::DerefMut for $handle<B> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.properties
            }
        }

        impl<B: typed_redfish_core::Bmc> $handle<B> {
            /// Identity and transport of this resource.
            #[must_use]
            pub const fn entity(&self) -> &typed_redfish_core::Entity<B> {
                &self.entity
            }

            /// Mutable identity, for the per-handle `If-Match` switches.
            pub fn entity_mut(&mut self) -> &mut typed_redfish_core::Entity<B> {
                &mut self.entity
            }
        }

        impl<B: typed_redfish_core::Bmc> ::core::fmt::Debug for $handle<B> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($handle))
                    .field("entity", &self.entity)
                    .field("properties", &self.properties)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// Implements [`typed_redfish_core::Updatable`] for a handle with the
/// given writable on-wire names.
macro_rules! updatable {
    ($handle:ident, $properties:ident, [$($writable:literal),* $(,)?]) => {
        impl<B: typed_redfish_core::Bmc> typed_redfish_core::Updatable<B> for $handle<B> {
            type Properties = $properties;

            const WRITABLE: &'static [&'static str] = &[$($writable),*];

            fn properties(&self) -> &Self::Properties {
                &self.properties
            }
        }

        impl<B: typed_redfish_core::Bmc> $handle<B> {
            /// Send the writable properties changed since the fetch.
            ///
            /// Nothing is sent when nothing changed. The handle keeps the
            /// fetched view; fetch again to see what the BMC applied.
            ///
            /// # Errors
            ///
            /// Transport error or [`typed_redfish_core::Error::Remote`] if
            /// the BMC rejects the PATCH.
            pub async fn update(&self) -> Result<(), typed_redfish_core::Error<B>> {
                typed_redfish_core::update_resource(self).await
            }
        }
    };
}

pub(crate) use resource_handle;
#[allow(unused_imports)] // used if any feature enabled.
pub(crate) use updatable;
