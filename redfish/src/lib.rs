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

//! Typed Redfish resources
//!
//! Every resource type follows the same recipe on top of
//! `typed-redfish-core`:
//!
//! - `XProperties`: public properties with their on-wire names. The
//!   handle `X<B>` dereferences to it, so properties are read and
//!   assigned directly (`chassis.asset_tag = Some(..)`).
//! - A private wire record collects `Links`, `Actions` and top-level link
//!   properties into hidden slots of the handle.
//! - `get_x(bmc, uri)` and `list_referenced_xs(bmc, collection_uri)`
//!   fetch handles; navigation methods fetch neighbours on every call.
//! - Writable resources have `update()`, which PATCHes only what changed.
//!
//! Resource families are enabled with cargo features (`chassis`,
//! `computer-systems`, `controls`, `managers`, `aggregation`, or
//! `std-redfish` for all of them).
//!
//! ```rust,no_run
//! # #[cfg(feature = "chassis")]
//! # async fn example<B: typed_redfish::Bmc>(bmc: std::sync::Arc<B>) -> Result<(), typed_redfish::Error<B>> {
//! use typed_redfish::chassis::get_chassis;
//! use typed_redfish::ResetType;
//!
//! let mut chassis = get_chassis(&bmc, &"/redfish/v1/Chassis/1".into()).await?;
//! chassis.asset_tag = Some("rack-7".into());
//! chassis.update().await?;
//! chassis.reset(ResetType::ForceOff).await?;
//! # Ok(())
//! # }
//! ```

/// Properties shared by resources.
pub mod resource;
/// Redfish service root.
pub mod service_root;

/// Aggregation service and aggregates.
#[cfg(feature = "aggregation")]
pub mod aggregation;
/// Chassis and their legacy power, thermal and sensor resources.
#[cfg(feature = "chassis")]
pub mod chassis;
/// Computer systems.
#[cfg(feature = "computer-systems")]
pub mod computer_system;
/// Controls (set points of fans, power limits...).
#[cfg(feature = "controls")]
pub mod control;
/// Managers and their network protocol settings.
#[cfg(feature = "managers")]
pub mod managers;
/// Virtual media of systems and managers.
#[cfg(feature = "virtual-media")]
pub mod virtual_media;

use std::sync::Arc;
use tracing::debug;

#[doc(inline)]
pub use resource::Health;
#[doc(inline)]
pub use resource::IndicatorLed;
#[doc(inline)]
pub use resource::PowerState;
#[doc(inline)]
pub use resource::ResetType;
#[doc(inline)]
pub use resource::Resource;
#[doc(inline)]
pub use resource::ResourceDescription;
#[doc(inline)]
pub use resource::ResourceId;
#[doc(inline)]
pub use resource::ResourceName;
#[doc(inline)]
pub use resource::State;
#[doc(inline)]
pub use resource::Status;
#[doc(inline)]
pub use service_root::get_service_root;
#[doc(inline)]
pub use service_root::ServiceRoot;

#[doc(inline)]
pub use typed_redfish_core::Batch;
#[doc(inline)]
pub use typed_redfish_core::Bmc;
#[doc(inline)]
pub use typed_redfish_core::Empty;
#[doc(inline)]
pub use typed_redfish_core::Error;
#[doc(inline)]
pub use typed_redfish_core::Link;
#[doc(inline)]
pub use typed_redfish_core::LinkSet;
#[doc(inline)]
pub use typed_redfish_core::ODataId;
#[doc(inline)]
pub use typed_redfish_core::Response;

#[cfg(feature = "bmc-http")]
pub use typed_redfish_bmc_http as bmc_http;

/// Fetch the resource behind `link`, `None` when the link is empty.
#[allow(dead_code)] // used if any feature enabled.
pub(crate) async fn follow<B, T>(bmc: &Arc<B>, link: &Link) -> Result<Option<T>, Error<B>>
where
    B: Bmc,
    T: typed_redfish_core::Resource<B>,
{
    match link.present() {
        Some(uri) => typed_redfish_core::get_object(bmc, uri).await.map(Some),
        None => {
            debug!("link absent, nothing to follow");
            Ok(None)
        }
    }
}

/// Fetch every resource of a link set, one after another.
#[allow(dead_code)] // used if any feature enabled.
pub(crate) async fn follow_all<B, T>(bmc: &Arc<B>, links: &LinkSet) -> Batch<T, B>
where
    B: Bmc,
    T: typed_redfish_core::Resource<B>,
{
    typed_redfish_core::get_objects(bmc, links.uris()).await
}

/// Fetch the members of the collection behind `link`. An empty link
/// yields an empty batch.
#[allow(dead_code)] // used if any feature enabled.
pub(crate) async fn follow_collection<B, T>(
    bmc: &Arc<B>,
    link: &Link,
) -> Result<Batch<T, B>, Error<B>>
where
    B: Bmc,
    T: typed_redfish_core::Resource<B>,
{
    match link.present() {
        Some(uri) => typed_redfish_core::get_collection_objects(bmc, uri).await,
        None => {
            debug!("collection link absent");
            Ok(Batch::empty())
        }
    }
}

/// Fetch the members of the collection at `uri`. An empty URI yields an
/// empty batch.
#[allow(dead_code)] // used if any feature enabled.
pub(crate) async fn list_referenced<B, T>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<T, B>, Error<B>>
where
    B: Bmc,
    T: typed_redfish_core::Resource<B>,
{
    if uri.is_empty() {
        debug!("empty collection reference");
        return Ok(Batch::empty());
    }
    typed_redfish_core::get_collection_objects(bmc, uri).await
}
