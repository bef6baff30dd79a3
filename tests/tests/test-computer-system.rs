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

//! Integration tests for Computer System resources.

use http::Method;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;
use typed_redfish::computer_system::get_computer_system;
use typed_redfish::computer_system::Boot;
use typed_redfish::computer_system::BootSourceOverrideEnabled;
use typed_redfish::computer_system::BootSourceOverrideMode;
use typed_redfish::computer_system::BootSourceOverrideTarget;
use typed_redfish::computer_system::PowerRestorePolicy;
use typed_redfish::Error;
use typed_redfish::IndicatorLed;
use typed_redfish::PowerState;
use typed_redfish::ResetType;
use typed_redfish_tests::fixtures;
use typed_redfish_tests::fixtures::CHASSIS_ID;
use typed_redfish_tests::fixtures::SYSTEM_ID;
use typed_redfish_tests::json_merge;
use typed_redfish_tests::Bmc;
use typed_redfish_tests::Expect;
use typed_redfish_tests::ODATA_ID;

const SYSTEM_VIRTUAL_MEDIA_ID: &str = "/redfish/v1/Systems/System-1/VirtualMedia";

async fn system(bmc: &Arc<Bmc>) -> Result<typed_redfish::computer_system::ComputerSystem<Bmc>, Box<dyn StdError>> {
    bmc.expect(Expect::get(SYSTEM_ID, fixtures::computer_system()));
    let system = get_computer_system(bmc, &SYSTEM_ID.into()).await?;
    bmc.clear_calls();
    Ok(system)
}

#[test]
async fn computer_system_public_fields() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;

    assert_eq!(system.power_state, Some(PowerState::On));
    assert_eq!(system.indicator_led, Some(IndicatorLed::Off));
    assert_eq!(system.power_restore_policy, Some(PowerRestorePolicy::LastState));
    let boot = system.boot.clone().unwrap_or_default();
    assert_eq!(boot.boot_source_override_enabled, Some(BootSourceOverrideEnabled::Once));
    assert_eq!(boot.boot_source_override_mode, Some(BootSourceOverrideMode::Uefi));
    assert_eq!(boot.boot_source_override_target, Some(BootSourceOverrideTarget::Pxe));
    assert_eq!(
        system.memory_summary.as_ref().and_then(|m| m.total_system_memory_gib),
        Some(96.0)
    );
    assert_eq!(system.chassis_links().uris(), &[CHASSIS_ID.into()]);
    assert_eq!(system.chassis_links().advertised_count(), Some(1));
    Ok(())
}

#[test]
async fn computer_system_update_without_changes_sends_nothing() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;

    system.update().await?;

    assert!(bmc.calls().is_empty());
    Ok(())
}

#[test]
async fn computer_system_boot_order_patch_keeps_siblings_out() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let mut system = system(&bmc).await?;

    system.set_boot_order(vec!["Boot0001".into(), "Boot0002".into()]);
    system.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].uri, SYSTEM_ID);
    assert_eq!(
        patches[0].payload,
        Some(json!({ "Boot": { "BootOrder": ["Boot0001", "Boot0002"] } }))
    );
    Ok(())
}

#[test]
async fn computer_system_update_sends_scalar_field() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let mut system = system(&bmc).await?;

    system.power_restore_policy = Some(PowerRestorePolicy::AlwaysOn);
    system.update().await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].payload, Some(json!({ "PowerRestorePolicy": "AlwaysOn" })));
    Ok(())
}

#[test]
async fn computer_system_set_boot_sends_given_settings() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;

    system
        .set_boot(&Boot {
            boot_source_override_enabled: Some(BootSourceOverrideEnabled::Continuous),
            boot_source_override_target: Some(BootSourceOverrideTarget::Hdd),
            ..Boot::default()
        })
        .await?;

    let patches = bmc.calls_with(&Method::PATCH);
    assert_eq!(
        patches[0].payload,
        Some(json!({
            "Boot": {
                "BootSourceOverrideEnabled": "Continuous",
                "BootSourceOverrideTarget": "Hdd"
            }
        }))
    );
    Ok(())
}

#[test]
async fn computer_system_reset_is_validated() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;

    system.reset(ResetType::GracefulRestart).await?;
    let result = system.reset(ResetType::Nmi).await;

    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
    let posts = bmc.calls_with(&Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].uri,
        "/redfish/v1/Systems/System-1/Actions/ComputerSystem.Reset"
    );
    assert_eq!(posts[0].payload, Some(json!({ "ResetType": "GracefulRestart" })));
    Ok(())
}

#[test]
async fn computer_system_set_default_boot_order_has_no_body() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;

    system.set_default_boot_order().await?;

    let posts = bmc.calls_with(&Method::POST);
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].uri,
        "/redfish/v1/Systems/System-1/Actions/ComputerSystem.SetDefaultBootOrder"
    );
    assert!(posts[0].payload.is_none());
    Ok(())
}

#[test]
async fn computer_system_unknown_reset_types_are_not_validated() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let payload = json_merge(
        &fixtures::computer_system(),
        &json!({
            "Actions": {
                "#ComputerSystem.Reset": {
                    "ResetType@Redfish.AllowableValues": []
                }
            }
        }),
    );
    bmc.expect(Expect::get(SYSTEM_ID, payload));
    let system = get_computer_system(&bmc, &SYSTEM_ID.into()).await?;

    system.reset(ResetType::Nmi).await?;

    assert_eq!(bmc.calls_with(&Method::POST).len(), 1);
    Ok(())
}

#[test]
async fn computer_system_virtual_media() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let system = system(&bmc).await?;
    let cd = format!("{SYSTEM_VIRTUAL_MEDIA_ID}/CD");
    bmc.expect(Expect::get(
        SYSTEM_VIRTUAL_MEDIA_ID,
        fixtures::collection(SYSTEM_VIRTUAL_MEDIA_ID, &[&cd]),
    ));
    bmc.expect(Expect::get(
        &cd,
        json_merge(&fixtures::virtual_media(), &json!({ ODATA_ID: &cd })),
    ));

    let media = system.virtual_media().await?.into_result()?;

    assert_eq!(media.len(), 1);
    assert_eq!(media[0].inserted, Some(true));
    assert!(media[0].supports_media_eject());
    Ok(())
}
