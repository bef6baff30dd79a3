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

//! Integration tests for managers and their network protocol settings.

use http::header;
use http::Method;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;
use typed_redfish::managers::get_manager;
use typed_redfish::managers::get_network_protocol;
use typed_redfish::managers::ManagerType;
use typed_redfish::managers::Protocol;
use typed_redfish::managers::ResetToDefaultsType;
use typed_redfish::Error;
use typed_redfish::PowerState;
use typed_redfish::ResetType;
use typed_redfish::State;
use typed_redfish_core::DateTimeOffset;
use typed_redfish_tests::fixtures;
use typed_redfish_tests::fixtures::CD_ID;
use typed_redfish_tests::fixtures::CHASSIS_ID;
use typed_redfish_tests::fixtures::MANAGER_ID;
use typed_redfish_tests::fixtures::NETWORK_PROTOCOL_ID;
use typed_redfish_tests::fixtures::SYSTEM_ID;
use typed_redfish_tests::fixtures::VIRTUAL_MEDIA_ID;
use typed_redfish_tests::json_merge;
use typed_redfish_tests::Bmc;
use typed_redfish_tests::Expect;

const MANAGER_RESET_TARGET: &str = "/redfish/v1/Managers/BMC-1/Actions/Manager.Reset";

#[test]
async fn manager_public_fields() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));

    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    assert_eq!(manager.manager_type, Some(ManagerType::Bmc));
    assert_eq!(manager.firmware_version.as_deref(), Some("1.00"));
    assert_eq!(manager.date_time.as_deref(), Some("2015-03-13T04:14:33+06:00"));
    assert_eq!(
        manager.date_time_offset().map(|v| v.to_string()).as_deref(),
        Some("2015-03-13T04:14:33+06:00")
    );
    assert_eq!(manager.manager_for_servers_links().uris(), &[SYSTEM_ID.into()]);
    assert_eq!(manager.manager_for_chassis_links().uris(), &[CHASSIS_ID.into()]);
    assert_eq!(manager.manager_in_chassis_link().uri().as_str(), CHASSIS_ID);
    assert_eq!(
        manager.network_protocol_link().uri().as_str(),
        NETWORK_PROTOCOL_ID
    );
    Ok(())
}

#[test]
async fn manager_update_without_changes_sends_nothing() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let payload = json_merge(
        &fixtures::manager(),
        &json!({ "DateTime": "2024-03-01T10:00:00+00:00" }),
    );
    bmc.expect(Expect::get(MANAGER_ID, payload));
    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager.update().await?;

    assert!(bmc.calls_with(&Method::PATCH).is_empty());
    Ok(())
}

#[test]
async fn manager_accepts_unlisted_values() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let payload = json_merge(
        &fixtures::manager(),
        &json!({
            "DateTime": "2024-03-01T10:00:00",
            "PowerState": "Standby",
            "Status": { "State": "Qualified", "Health": "OK" }
        }),
    );
    bmc.expect(Expect::get(MANAGER_ID, payload));

    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    assert_eq!(manager.date_time.as_deref(), Some("2024-03-01T10:00:00"));
    assert_eq!(manager.date_time_offset(), None);
    assert_eq!(manager.power_state, Some(PowerState::Unknown));
    assert_eq!(
        manager.status.as_ref().and_then(|status| status.state),
        Some(State::Unknown)
    );
    manager.update().await?;
    assert!(bmc.calls_with(&Method::PATCH).is_empty());
    Ok(())
}

#[test]
async fn manager_set_date_time_patches_clock() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));
    let mut manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager.set_date_time("2024-03-01T10:00:00+00:00".parse::<DateTimeOffset>()?);
    manager.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].payload, Some(json!({ "DateTime": "2024-03-01T10:00:00Z" })));
    Ok(())
}

#[test]
async fn manager_update_sends_only_changed_field() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));
    let mut manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager.update().await?;
    assert!(bmc.calls_with(&Method::PATCH).is_empty());

    manager.service_identification = Some("rack-8".into());
    manager.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].payload, Some(json!({ "ServiceIdentification": "rack-8" })));
    Ok(())
}

#[test]
async fn manager_reset_with_type_is_validated() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));
    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager.reset(Some(ResetType::GracefulRestart)).await?;
    let rejected = manager.reset(Some(ResetType::ForceOff)).await;

    assert!(matches!(rejected, Err(Error::InvalidParameter { .. })));
    let posts = bmc.calls_with(&Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].uri, MANAGER_RESET_TARGET);
    assert_eq!(posts[0].payload, Some(json!({ "ResetType": "GracefulRestart" })));
    Ok(())
}

#[test]
async fn manager_reset_without_type_posts_empty_object() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let payload = json_merge(
        &fixtures::manager(),
        &json!({
            "Actions": {
                "#Manager.Reset": { "ResetType@Redfish.AllowableValues": [] }
            }
        }),
    );
    bmc.expect(Expect::get(MANAGER_ID, payload));
    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager.reset(None).await?;

    let posts = bmc.calls_with(&Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].payload, Some(json!({})));
    Ok(())
}

#[test]
async fn manager_reset_to_defaults_is_validated() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));
    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    manager
        .reset_to_defaults(ResetToDefaultsType::PreserveNetwork)
        .await?;
    let rejected = manager
        .reset_to_defaults(ResetToDefaultsType::PreserveNetworkAndUsers)
        .await;

    match rejected {
        Err(Error::InvalidParameter { value, .. }) => {
            assert_eq!(value, "PreserveNetworkAndUsers");
        }
        other => panic!("expected invalid parameter, got {other:?}"),
    }
    let posts = bmc.calls_with(&Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].payload, Some(json!({ "ResetType": "PreserveNetwork" })));
    Ok(())
}

#[test]
async fn manager_follows_network_protocol_and_virtual_media() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(MANAGER_ID, fixtures::manager()));
    bmc.expect(Expect::get(NETWORK_PROTOCOL_ID, fixtures::network_protocol()));
    bmc.expect(Expect::get(
        VIRTUAL_MEDIA_ID,
        fixtures::collection(VIRTUAL_MEDIA_ID, &[CD_ID]),
    ));
    bmc.expect(Expect::get(CD_ID, fixtures::virtual_media()));
    let manager = get_manager(&bmc, &MANAGER_ID.into()).await?;

    let protocol = manager
        .network_protocol()
        .await?
        .ok_or("network protocol expected")?;
    assert_eq!(protocol.host_name.as_deref(), Some("web483-bmc"));
    let media = manager.virtual_media().await?.into_result()?;
    assert_eq!(media.len(), 1);
    assert_eq!(bmc.pending(), 0);
    Ok(())
}

#[test]
async fn network_protocol_update_without_changes_sends_nothing() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(NETWORK_PROTOCOL_ID, fixtures::network_protocol()));
    let protocol = get_network_protocol(&bmc, &NETWORK_PROTOCOL_ID.into()).await?;

    protocol.update().await?;

    assert!(bmc.calls_with(&Method::PATCH).is_empty());
    Ok(())
}

#[test]
async fn network_protocol_ntp_servers_patch_is_minimal() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(NETWORK_PROTOCOL_ID, fixtures::network_protocol()));
    let mut protocol = get_network_protocol(&bmc, &NETWORK_PROTOCOL_ID.into()).await?;
    assert!(protocol.ntp_configured());

    if let Some(ntp) = protocol.ntp.as_mut() {
        ntp.ntp_servers = Some(vec![
            "0.ru.pool.ntp.org".into(),
            "1.ru.pool.ntp.org".into(),
        ]);
    }
    protocol.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].uri, NETWORK_PROTOCOL_ID);
    assert_eq!(
        patches[0].payload,
        Some(json!({
            "NTP": { "NTPServers": ["0.ru.pool.ntp.org", "1.ru.pool.ntp.org"] }
        }))
    );
    Ok(())
}

#[test]
async fn network_protocol_nested_leaf_patch() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get_with_etag(
        NETWORK_PROTOCOL_ID,
        "\"7\"",
        fixtures::network_protocol(),
    ));
    let mut protocol = get_network_protocol(&bmc, &NETWORK_PROTOCOL_ID.into()).await?;

    protocol.ipmi = Some(Protocol {
        protocol_enabled: Some(false),
        port: Some(623),
    });
    protocol.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(
        patches[0].payload,
        Some(json!({ "IPMI": { "ProtocolEnabled": false } }))
    );
    assert!(patches[0].headers.contains_key(header::IF_MATCH));
    Ok(())
}

#[test]
async fn network_protocol_enables_absent_service() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(NETWORK_PROTOCOL_ID, fixtures::network_protocol()));
    let mut protocol = get_network_protocol(&bmc, &NETWORK_PROTOCOL_ID.into()).await?;
    assert!(protocol.rdp.is_none());

    protocol.rdp = Some(Protocol {
        protocol_enabled: Some(true),
        port: None,
    });
    protocol.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(
        patches[0].payload,
        Some(json!({ "RDP": { "ProtocolEnabled": true } }))
    );
    Ok(())
}
