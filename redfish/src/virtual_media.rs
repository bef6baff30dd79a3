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

//! `VirtualMedia` resource shared by systems and managers.

use crate::list_referenced;
use crate::resource::resource_handle;
use crate::resource::updatable;
use crate::Batch;
use crate::Error;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Actions;
use typed_redfish_core::Bmc;
use typed_redfish_core::Empty;
use typed_redfish_core::Entity;
use typed_redfish_core::LinkSet;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;
use typed_redfish_core::Response;

const EJECT_MEDIA: &str = "VirtualMedia.EjectMedia";
const INSERT_MEDIA: &str = "VirtualMedia.InsertMedia";

/// How the media is connected to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectedVia {
    NotConnected,
    #[serde(rename = "URI")]
    Uri,
    Applet,
    Oem,
    #[serde(other)]
    Unknown,
}

/// Kind of virtual media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "CD")]
    Cd,
    Floppy,
    #[serde(rename = "USBStick")]
    UsbStick,
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(other)]
    Unknown,
}

/// How the image is transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferMethod {
    Stream,
    Upload,
    #[serde(other)]
    Unknown,
}

/// Network protocol used to fetch the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferProtocolType {
    Cifs,
    Ftp,
    Sftp,
    Http,
    Https,
    Nfs,
    Scp,
    Tftp,
    Oem,
    #[serde(other)]
    Unknown,
}

/// Public properties of a virtual media slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualMediaProperties {
    pub image: Option<String>,
    pub image_name: Option<String>,
    pub inserted: Option<bool>,
    pub write_protected: Option<bool>,
    pub connected_via: Option<ConnectedVia>,
    pub media_types: Option<Vec<MediaType>>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub transfer_method: Option<TransferMethod>,
    pub transfer_protocol_type: Option<TransferProtocolType>,
    pub verify_certificate: Option<bool>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct VirtualMediaWire {
    #[serde(flatten)]
    properties: VirtualMediaProperties,
    #[serde(rename = "Actions", default)]
    actions: Actions,
    #[serde(rename = "Certificates", default)]
    certificates: LinkSet,
    #[serde(rename = "ClientCertificates", default)]
    client_certificates: LinkSet,
}

/// Represents a virtual media slot.
pub struct VirtualMedia<B: Bmc> {
    entity: Entity<B>,
    properties: VirtualMediaProperties,
    certificates: LinkSet,
    client_certificates: LinkSet,
    actions: Actions,
}

resource_handle!(VirtualMedia, VirtualMediaProperties);

updatable!(
    VirtualMedia,
    VirtualMediaProperties,
    [
        "Image",
        "Inserted",
        "Password",
        "TransferMethod",
        "TransferProtocolType",
        "UserName",
        "VerifyCertificate",
        "WriteProtected",
    ]
);

impl<B: Bmc> Resource<B> for VirtualMedia<B> {
    type Wire = VirtualMediaWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
            certificates: wire.certificates,
            client_certificates: wire.client_certificates,
            actions: wire.actions,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Parameters of `VirtualMedia.InsertMedia`. Unset parameters are not
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InsertMedia {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_method: Option<TransferMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_protocol_type: Option<TransferProtocolType>,
}

impl InsertMedia {
    /// Insert `image` with every other parameter left to the BMC.
    #[must_use]
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Self::default()
        }
    }
}

/// Fetch the virtual media slot at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_virtual_media<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<VirtualMedia<B>, Error<B>> {
    get_object(bmc, uri).await
}

/// Fetch every virtual media slot of the collection at `uri`.
///
/// # Errors
///
/// Returns an error if the collection itself cannot be retrieved.
pub async fn list_referenced_virtual_media<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<Batch<VirtualMedia<B>, B>, Error<B>> {
    list_referenced(bmc, uri).await
}

impl<B: Bmc> VirtualMedia<B> {
    /// Actions advertised by this slot.
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// True when the slot advertises `VirtualMedia.EjectMedia`.
    #[must_use]
    pub fn supports_media_eject(&self) -> bool {
        self.actions.supports(EJECT_MEDIA)
    }

    /// True when the slot advertises `VirtualMedia.InsertMedia`.
    #[must_use]
    pub fn supports_media_insert(&self) -> bool {
        self.actions.supports(INSERT_MEDIA)
    }

    /// Certificates used to validate the image server.
    #[must_use]
    pub const fn certificate_links(&self) -> &LinkSet {
        &self.certificates
    }

    /// Client certificates presented to the image server.
    #[must_use]
    pub const fn client_certificate_links(&self) -> &LinkSet {
        &self.client_certificates
    }

    /// Insert `image`, optionally marking it inserted and write
    /// protected.
    ///
    /// # Errors
    ///
    /// See [`Self::insert_media_with`].
    pub async fn insert_media(
        &self,
        image: impl Into<String>,
        inserted: bool,
        write_protected: bool,
    ) -> Result<Response, Error<B>> {
        self.insert_media_with(&InsertMedia {
            inserted: Some(inserted),
            write_protected: Some(write_protected),
            ..InsertMedia::new(image)
        })
        .await
    }

    /// Insert media with full control over the parameters.
    ///
    /// The returned response carries the task monitor in `Location`
    /// when the BMC answers `202 Accepted`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if `InsertMedia` is not advertised;
    /// - [`Error::InvalidParameter`] if `TransferMethod` or
    ///   `TransferProtocolType` is outside the advertised values.
    pub async fn insert_media_with(&self, params: &InsertMedia) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, INSERT_MEDIA, params)
            .await
    }

    /// Eject the media. Sends `{}`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAction`] if `EjectMedia` is not advertised.
    pub async fn eject_media(&self) -> Result<Response, Error<B>> {
        self.entity
            .run_action(&self.actions, EJECT_MEDIA, &Empty {})
            .await
    }
}
