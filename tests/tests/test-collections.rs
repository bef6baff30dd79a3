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

//! Integration tests for collections, batches and the service root.

use http::Method;
use http::StatusCode;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;
use typed_redfish::chassis::list_referenced_chassis;
use typed_redfish::chassis::Chassis;
use typed_redfish::Error;
use typed_redfish::ODataId;
use typed_redfish::ServiceRoot;
use typed_redfish_core::get_collection;
use typed_redfish_core::get_objects;
use typed_redfish_tests::fixtures;
use typed_redfish_tests::fixtures::CHASSIS_COLLECTION_ID;
use typed_redfish_tests::fixtures::CHASSIS_ID;
use typed_redfish_tests::fixtures::ROOT_ID;
use typed_redfish_tests::init_logging;
use typed_redfish_tests::json_merge;
use typed_redfish_tests::Bmc;
use typed_redfish_tests::Expect;
use typed_redfish_tests::ODATA_ID;

fn chassis_with_id(id: &str) -> serde_json::Value {
    json_merge(
        &fixtures::chassis(),
        &json!({ ODATA_ID: id, "Id": fixtures::resource_name(id) }),
    )
}

#[test]
async fn service_root_public_fields() -> Result<(), Box<dyn StdError>> {
    init_logging();
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(ROOT_ID, fixtures::service_root()));

    let root = ServiceRoot::new(bmc.clone()).await?;

    assert_eq!(root.redfish_version.as_deref(), Some("1.15.0"));
    assert_eq!(root.vendor.as_deref(), Some("Contoso"));
    assert_eq!(root.chassis_collection().uri().as_str(), CHASSIS_COLLECTION_ID);
    assert_eq!(root.systems_collection().uri().as_str(), fixtures::SYSTEMS_ID);
    assert_eq!(root.managers_collection().uri().as_str(), fixtures::MANAGERS_ID);
    Ok(())
}

#[test]
async fn service_root_lists_chassis() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(ROOT_ID, fixtures::service_root()));
    bmc.expect(Expect::get(
        CHASSIS_COLLECTION_ID,
        fixtures::collection(CHASSIS_COLLECTION_ID, &[CHASSIS_ID]),
    ));
    bmc.expect(Expect::get(CHASSIS_ID, fixtures::chassis()));

    let root = ServiceRoot::new(bmc.clone()).await?;
    let chassis = root.chassis().await?.into_result()?;

    assert_eq!(chassis.len(), 1);
    assert_eq!(chassis[0].asset_tag.as_deref(), Some("Chicago-45Z-2381"));
    assert_eq!(bmc.pending(), 0);
    Ok(())
}

#[test]
async fn service_root_without_collection_yields_empty_batch() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let mut root = fixtures::service_root();
    root.as_object_mut().map(|obj| obj.remove("Systems"));
    bmc.expect(Expect::get(ROOT_ID, root));

    let root = ServiceRoot::new(bmc.clone()).await?;
    bmc.clear_calls();
    let systems = root.systems().await?;

    assert!(systems.items.is_empty());
    assert!(systems.is_complete());
    assert!(bmc.calls().is_empty());
    Ok(())
}

#[test]
async fn collection_pages_are_concatenated_in_order() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let page2 = format!("{CHASSIS_COLLECTION_ID}?$skip=2");
    let page3 = format!("{CHASSIS_COLLECTION_ID}?$skip=4");
    bmc.expect(Expect::get(
        CHASSIS_COLLECTION_ID,
        json!({
            ODATA_ID: CHASSIS_COLLECTION_ID,
            "Members": [ { ODATA_ID: "/redfish/v1/Chassis/1" }, { ODATA_ID: "/redfish/v1/Chassis/2" } ],
            "Members@odata.count": 5,
            "Members@odata.nextLink": &page2
        }),
    ));
    bmc.expect(Expect::get(
        &page2,
        json!({
            ODATA_ID: CHASSIS_COLLECTION_ID,
            "Members": [ { ODATA_ID: "/redfish/v1/Chassis/3" }, { ODATA_ID: "/redfish/v1/Chassis/4" } ],
            "Members@odata.nextLink": &page3
        }),
    ));
    bmc.expect(Expect::get(
        &page3,
        json!({
            ODATA_ID: CHASSIS_COLLECTION_ID,
            "Members": [ { ODATA_ID: "/redfish/v1/Chassis/5" } ]
        }),
    ));

    let collection = get_collection(&bmc, &CHASSIS_COLLECTION_ID.into()).await?;

    let expected: Vec<ODataId> = (1..=5)
        .map(|n| format!("/redfish/v1/Chassis/{n}").into())
        .collect();
    assert_eq!(collection.members, expected);
    assert_eq!(collection.advertised_count, Some(5));
    assert_eq!(collection.pages, 3);
    Ok(())
}

#[test]
async fn collection_stops_on_repeated_continuation() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let page2 = format!("{CHASSIS_COLLECTION_ID}?$skip=1");
    bmc.expect(Expect::get(
        CHASSIS_COLLECTION_ID,
        json!({
            "Members": [ { ODATA_ID: "/redfish/v1/Chassis/1" } ],
            "Members@odata.nextLink": &page2
        }),
    ));
    bmc.expect(Expect::get(
        &page2,
        json!({
            "Members": [ { ODATA_ID: "/redfish/v1/Chassis/2" } ],
            "Members@odata.nextLink": &page2
        }),
    ));

    let collection = get_collection(&bmc, &CHASSIS_COLLECTION_ID.into()).await?;

    assert_eq!(collection.members.len(), 2);
    assert_eq!(collection.pages, 2);
    assert_eq!(bmc.calls_with(&Method::GET).len(), 2);
    Ok(())
}

#[test]
async fn collection_reads_legacy_links_members() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(
        CHASSIS_COLLECTION_ID,
        json!({
            ODATA_ID: CHASSIS_COLLECTION_ID,
            "Links": {
                "Members": [ { "href": "/redfish/v1/Chassis/1" }, { "href": "/redfish/v1/Chassis/2" } ]
            }
        }),
    ));

    let collection = get_collection(&bmc, &CHASSIS_COLLECTION_ID.into()).await?;

    assert_eq!(
        collection.members,
        vec![ODataId::from("/redfish/v1/Chassis/1"), "/redfish/v1/Chassis/2".into()]
    );
    Ok(())
}

#[test]
async fn batch_keeps_successes_and_reports_failures() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let good = "/redfish/v1/Chassis/1";
    let missing = "/redfish/v1/Chassis/2";
    let last = "/redfish/v1/Chassis/3";
    bmc.expect(Expect::get(
        CHASSIS_COLLECTION_ID,
        fixtures::collection(CHASSIS_COLLECTION_ID, &[good, missing, last]),
    ));
    bmc.expect(Expect::get(good, chassis_with_id(good)));
    bmc.expect(Expect::respond(
        Method::GET,
        missing,
        404,
        json!({
            "error": {
                "code": "Base.1.8.GeneralError",
                "message": "A general error has occurred.",
                "@Message.ExtendedInfo": [
                    { "MessageId": "Base.1.8.ResourceMissingAtURI", "Message": "not found" }
                ]
            }
        })
        .to_string(),
    ));
    bmc.expect(Expect::get(last, chassis_with_id(last)));

    let batch = list_referenced_chassis(&bmc, &CHASSIS_COLLECTION_ID.into()).await?;

    let ids = batch
        .items
        .iter()
        .map(|chassis| chassis.entity().odata_id().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![good, last]);
    let failures = batch.failures.ok_or("failures expected")?;
    assert_eq!(failures.len(), 1);
    match failures.failures.get(&ODataId::from(missing)) {
        Some(Error::Remote(remote)) => {
            assert_eq!(remote.status, StatusCode::NOT_FOUND);
            let redfish = remote.redfish.as_ref().ok_or("redfish error expected")?;
            assert_eq!(redfish.code, "Base.1.8.GeneralError");
            assert_eq!(
                redfish.extended_info[0].message_id,
                "Base.1.8.ResourceMissingAtURI"
            );
        }
        other => panic!("expected remote error, got {other:?}"),
    }
    Ok(())
}

#[test]
async fn batch_into_result_fails_on_any_failure() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(CHASSIS_ID, fixtures::chassis()));
    let uris = [ODataId::from(CHASSIS_ID), "/redfish/v1/Chassis/gone".into()];

    let batch = get_objects::<_, Chassis<Bmc>>(&bmc, &uris).await;

    assert_eq!(batch.items.len(), 1);
    assert!(!batch.is_complete());
    let err = batch.into_result().err().ok_or("batch must fail")?;
    assert!(matches!(err, Error::Collection(_)));
    let source = err.source().ok_or("collection error is chained")?;
    assert!(source.to_string().contains("/redfish/v1/Chassis/gone"));
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(err);
    assert!(boxed.to_string().starts_with("failed to retrieve some items: "));
    Ok(())
}

#[test]
async fn collection_failure_is_reported_as_error() {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::respond(
        Method::GET,
        CHASSIS_COLLECTION_ID,
        500,
        "internal error",
    ));

    match list_referenced_chassis(&bmc, &CHASSIS_COLLECTION_ID.into()).await {
        Err(Error::Remote(remote)) => {
            assert_eq!(remote.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(remote.body, "internal error");
            assert!(remote.redfish.is_none());
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[test]
async fn empty_collection_uri_issues_no_request() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());

    let batch = list_referenced_chassis(&bmc, &ODataId::default()).await?;

    assert!(batch.items.is_empty());
    assert!(bmc.calls().is_empty());
    Ok(())
}

#[test]
async fn missing_self_uri_falls_back_to_requested_uri() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let mut payload = fixtures::chassis();
    payload.as_object_mut().map(|obj| obj.remove(ODATA_ID));
    bmc.expect(Expect::get(CHASSIS_ID, payload));

    let chassis = typed_redfish::chassis::get_chassis(&bmc, &CHASSIS_ID.into()).await?;

    assert_eq!(chassis.entity().odata_id().as_str(), CHASSIS_ID);
    Ok(())
}
