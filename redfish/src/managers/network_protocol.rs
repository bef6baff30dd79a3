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

//! `ManagerNetworkProtocol`: services the manager exposes on the network.

use crate::resource::resource_handle;
use crate::resource::updatable;
use crate::Error;
use crate::Status;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use typed_redfish_core::get_object;
use typed_redfish_core::Bmc;
use typed_redfish_core::Entity;
use typed_redfish_core::ODataId;
use typed_redfish_core::Oem;
use typed_redfish_core::Resource;

/// State of one network service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Protocol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// NTP client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NtpProtocol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "NTPServers", skip_serializing_if = "Option::is_none")]
    pub ntp_servers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkProtocolProperties {
    pub host_name: Option<String>,
    #[serde(rename = "FQDN")]
    pub fqdn: Option<String>,
    #[serde(rename = "HTTP")]
    pub http: Option<Protocol>,
    #[serde(rename = "HTTPS")]
    pub https: Option<Protocol>,
    #[serde(rename = "IPMI")]
    pub ipmi: Option<Protocol>,
    #[serde(rename = "SSH")]
    pub ssh: Option<Protocol>,
    #[serde(rename = "SNMP")]
    pub snmp: Option<Protocol>,
    #[serde(rename = "SSDP")]
    pub ssdp: Option<Protocol>,
    pub telnet: Option<Protocol>,
    #[serde(rename = "KVMIP")]
    pub kvmip: Option<Protocol>,
    pub virtual_media: Option<Protocol>,
    #[serde(rename = "NTP")]
    pub ntp: Option<NtpProtocol>,
    #[serde(rename = "DHCP")]
    pub dhcp: Option<Protocol>,
    #[serde(rename = "DHCPv6")]
    pub dhcpv6: Option<Protocol>,
    #[serde(rename = "RDP")]
    pub rdp: Option<Protocol>,
    #[serde(rename = "RFB")]
    pub rfb: Option<Protocol>,
    pub proxy: Option<Protocol>,
    pub status: Option<Status>,
    pub oem: Option<Oem>,
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct NetworkProtocolWire {
    #[serde(flatten)]
    properties: NetworkProtocolProperties,
}

/// Network services of a manager.
pub struct NetworkProtocol<B: Bmc> {
    entity: Entity<B>,
    properties: NetworkProtocolProperties,
}

resource_handle!(NetworkProtocol, NetworkProtocolProperties);

updatable!(
    NetworkProtocol,
    NetworkProtocolProperties,
    [
        "HostName", "HTTP", "HTTPS", "IPMI", "SSH", "SNMP", "SSDP", "Telnet", "KVMIP",
        "VirtualMedia", "NTP", "DHCP", "DHCPv6", "RDP", "RFB", "Proxy",
    ]
);

impl<B: Bmc> Resource<B> for NetworkProtocol<B> {
    type Wire = NetworkProtocolWire;

    fn assemble(entity: Entity<B>, wire: Self::Wire) -> Self {
        Self {
            entity,
            properties: wire.properties,
        }
    }

    fn entity(&self) -> &Entity<B> {
        &self.entity
    }
}

/// Fetch the network protocol settings at `uri`.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn get_network_protocol<B: Bmc>(
    bmc: &Arc<B>,
    uri: &ODataId,
) -> Result<NetworkProtocol<B>, Error<B>> {
    get_object(bmc, uri).await
}

impl<B: Bmc> NetworkProtocol<B> {
    /// True when NTP is enabled and at least one server is configured.
    #[must_use]
    pub fn ntp_configured(&self) -> bool {
        self.properties.ntp.as_ref().is_some_and(|ntp| {
            ntp.protocol_enabled == Some(true)
                && ntp
                    .ntp_servers
                    .as_ref()
                    .is_some_and(|servers| servers.iter().any(|s| !s.is_empty()))
        })
    }

    /// Configure NTP servers and enable the client. Takes effect on the
    /// next `update()`.
    pub fn set_ntp_servers(&mut self, servers: Vec<String>) {
        let ntp = self.properties.ntp.get_or_insert_with(NtpProtocol::default);
        ntp.protocol_enabled = Some(true);
        ntp.ntp_servers = Some(servers);
    }
}
