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

//! Core of the typed Redfish client.
//!
//! The crate is transport-agnostic. Everything that talks to a BMC goes
//! through the [`Bmc`] trait, and everything decoded from a BMC is a
//! [`Resource`] handle that keeps the transport it came from.
//!
//! Building blocks:
//! - [`Link`] and [`LinkSet`]: neighbour references reduced to bare URIs.
//! - [`Entity`]: identity of a decoded resource plus its raw payload.
//! - [`get_object`], [`get_objects`], [`get_collection`] and
//!   [`get_collection_objects`]: lazy graph traversal.
//! - [`Updatable`] and [`update_resource`]: diff-based PATCH.
//! - [`Actions`]: action registry with allowed-value validation.

/// Registry of resource actions.
pub mod action;
/// Transport abstraction.
pub mod bmc;
/// `Edm.DateTimeOffset` wrapper.
pub mod datetime;
/// Decoded resource identity.
pub mod entity;
/// Error taxonomy.
pub mod error;
/// Object and collection retrieval.
pub mod fetch;
/// Links to neighbour resources.
pub mod link;
/// OData identifiers.
pub mod odata;
/// Diff-patch update engine.
pub mod update;

use serde::Deserialize;
use serde::Serialize;

#[doc(inline)]
pub use action::Action;
#[doc(inline)]
pub use action::ActionTarget;
#[doc(inline)]
pub use action::Actions;
#[doc(inline)]
pub use bmc::Bmc;
#[doc(inline)]
pub use bmc::Response;
#[doc(inline)]
pub use datetime::DateTimeOffset;
#[doc(inline)]
pub use entity::Entity;
#[doc(inline)]
pub use entity::Resource;
#[doc(inline)]
pub use error::CollectionError;
#[doc(inline)]
pub use error::DecodeError;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use error::MessageInfo;
#[doc(inline)]
pub use error::RedfishError;
#[doc(inline)]
pub use error::RemoteError;
#[doc(inline)]
pub use fetch::decode_object;
#[doc(inline)]
pub use fetch::delete_object;
#[doc(inline)]
pub use fetch::get_collection;
#[doc(inline)]
pub use fetch::get_collection_objects;
#[doc(inline)]
pub use fetch::get_object;
#[doc(inline)]
pub use fetch::get_objects;
#[doc(inline)]
pub use fetch::Batch;
#[doc(inline)]
pub use fetch::Collection;
#[doc(inline)]
pub use link::Link;
#[doc(inline)]
pub use link::LinkSet;
#[doc(inline)]
pub use odata::ODataETag;
#[doc(inline)]
pub use odata::ODataId;
#[doc(inline)]
pub use odata::ODataType;
#[doc(inline)]
pub use odata::Oem;
#[doc(inline)]
pub use update::update_resource;
#[doc(inline)]
pub use update::Updatable;

/// Empty JSON object `{}`.
///
/// Used as action parameters for actions that take no arguments but
/// whose servers expect an object body rather than no body at all.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}
