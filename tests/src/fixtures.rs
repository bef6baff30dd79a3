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

use crate::ODATA_ID;
use crate::ODATA_TYPE;
use serde_json::json;
use serde_json::Value;

pub const ROOT_ID: &str = "/redfish/v1";
pub const CHASSIS_COLLECTION_ID: &str = "/redfish/v1/Chassis";
pub const CHASSIS_ID: &str = "/redfish/v1/Chassis/Chassis-1";
pub const CHASSIS_RESET_TARGET: &str = "/redfish/v1/Chassis/System.Embedded.1/Actions/Chassis.Reset";
pub const SYSTEMS_ID: &str = "/redfish/v1/Systems";
pub const SYSTEM_ID: &str = "/redfish/v1/Systems/System-1";
pub const MANAGERS_ID: &str = "/redfish/v1/Managers";
pub const MANAGER_ID: &str = "/redfish/v1/Managers/BMC-1";
pub const NETWORK_PROTOCOL_ID: &str = "/redfish/v1/Managers/BMC-1/NetworkProtocol";
pub const VIRTUAL_MEDIA_ID: &str = "/redfish/v1/Managers/BMC-1/VirtualMedia";
pub const CD_ID: &str = "/redfish/v1/Managers/BMC-1/VirtualMedia/CD";
pub const AGGREGATION_SERVICE_ID: &str = "/redfish/v1/AggregationService";
pub const AGGREGATES_ID: &str = "/redfish/v1/AggregationService/Aggregates";
pub const AGGREGATE_ID: &str = "/redfish/v1/AggregationService/Aggregates/Aggregate-1";

/// Last path segment, used as `Id`.
#[must_use]
pub fn resource_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

#[must_use]
pub fn service_root() -> Value {
    json!({
        ODATA_ID: ROOT_ID,
        ODATA_TYPE: "#ServiceRoot.v1_13_0.ServiceRoot",
        "Id": "RootService",
        "Name": "Root Service",
        "RedfishVersion": "1.15.0",
        "UUID": "92384634-2938-2342-8820-489239905423",
        "Vendor": "Contoso",
        "Chassis": { ODATA_ID: CHASSIS_COLLECTION_ID },
        "Systems": { ODATA_ID: SYSTEMS_ID },
        "Managers": { ODATA_ID: MANAGERS_ID },
        "AggregationService": { ODATA_ID: AGGREGATION_SERVICE_ID },
        "Links": { "Sessions": { ODATA_ID: "/redfish/v1/SessionService/Sessions" } }
    })
}

/// Collection document over `members`.
#[must_use]
pub fn collection(id: &str, members: &[&str]) -> Value {
    json!({
        ODATA_ID: id,
        ODATA_TYPE: "#ResourceCollection.ResourceCollection",
        "Name": format!("{} Collection", resource_name(id)),
        "Members": members.iter().map(|m| json!({ ODATA_ID: m })).collect::<Vec<_>>(),
        "Members@odata.count": members.len(),
    })
}

#[must_use]
pub fn chassis() -> Value {
    json!({
        "@odata.context": "/redfish/v1/$metadata#Chassis.Chassis",
        ODATA_ID: CHASSIS_ID,
        ODATA_TYPE: "#Chassis.v1_0_0.Chassis",
        "Id": "Chassis-1",
        "Name": "Computer System Chassis",
        "ChassisType": "RackMount",
        "Manufacturer": "Redfish Computers",
        "Model": "3500RX",
        "SKU": "8675309",
        "SerialNumber": "437XR1138R2",
        "Version": "1.02",
        "PartNumber": "224071-J23",
        "AssetTag": "Chicago-45Z-2381",
        "Status": {
            "State": "Enabled",
            "Health": "OK"
        },
        "Assembly": { ODATA_ID: "/redfish/v1/Chassis/Chassis-1/Assembly" },
        "Drives": { ODATA_ID: "/redfish/v1/Chassis/Chassis-1/Drives" },
        "Thermal": { ODATA_ID: "/redfish/v1/Chassis/Chassis-1/Thermal" },
        "Power": { ODATA_ID: "/redfish/v1/Chassis/Chassis-1/Power" },
        "Links": {
            "ComputerSystems": [ { ODATA_ID: SYSTEM_ID } ],
            "ResourceBlocks": [],
            "ManagedBy": [ { ODATA_ID: MANAGER_ID } ]
        },
        "Actions": {
            "#Chassis.Reset": {
                "target": CHASSIS_RESET_TARGET,
                "ResetType@Redfish.AllowableValues": ["On", "ForceOff"]
            }
        }
    })
}

#[must_use]
pub fn computer_system() -> Value {
    json!({
        ODATA_ID: SYSTEM_ID,
        ODATA_TYPE: "#ComputerSystem.v1_20_0.ComputerSystem",
        "Id": "System-1",
        "Name": "WebFrontEnd483",
        "SystemType": "Physical",
        "AssetTag": "Chicago-45Z-2381",
        "Manufacturer": "Contoso",
        "Model": "3500RX",
        "HostName": "web483",
        "IndicatorLED": "Off",
        "PowerState": "On",
        "PowerRestorePolicy": "LastState",
        "BiosVersion": "P79 v1.33 (02/28/2015)",
        "Boot": {
            "BootSourceOverrideEnabled": "Once",
            "BootSourceOverrideMode": "UEFI",
            "BootSourceOverrideTarget": "Pxe",
            "BootOrder": ["Boot0002", "Boot0001"]
        },
        "ProcessorSummary": { "Count": 2, "Model": "Multi-Core Intel(R) Xeon(R) processor 7xxx Series" },
        "MemorySummary": { "TotalSystemMemoryGiB": 96 },
        "Status": { "State": "Enabled", "Health": "OK", "HealthRollup": "OK" },
        "VirtualMedia": { ODATA_ID: "/redfish/v1/Systems/System-1/VirtualMedia" },
        "Links": {
            "Chassis": [ { ODATA_ID: CHASSIS_ID } ],
            "Chassis@odata.count": 1,
            "ManagedBy": [ { ODATA_ID: MANAGER_ID } ]
        },
        "Actions": {
            "#ComputerSystem.Reset": {
                "target": "/redfish/v1/Systems/System-1/Actions/ComputerSystem.Reset",
                "ResetType@Redfish.AllowableValues": ["On", "ForceOff", "GracefulRestart", "ForceRestart"]
            },
            "#ComputerSystem.SetDefaultBootOrder": {
                "target": "/redfish/v1/Systems/System-1/Actions/ComputerSystem.SetDefaultBootOrder"
            }
        }
    })
}

#[must_use]
pub fn manager() -> Value {
    json!({
        ODATA_ID: MANAGER_ID,
        ODATA_TYPE: "#Manager.v1_10_0.Manager",
        "Id": "BMC-1",
        "Name": "Manager",
        "ManagerType": "BMC",
        "FirmwareVersion": "1.00",
        "UUID": "58893887-8974-2487-2389-841168418919",
        "DateTime": "2015-03-13T04:14:33+06:00",
        "DateTimeLocalOffset": "+06:00",
        "ServiceIdentification": "rack-7",
        "PowerState": "On",
        "Status": { "State": "Enabled", "Health": "OK" },
        "NetworkProtocol": { ODATA_ID: NETWORK_PROTOCOL_ID },
        "VirtualMedia": { ODATA_ID: VIRTUAL_MEDIA_ID },
        "Links": {
            "ManagerForServers": [ { ODATA_ID: SYSTEM_ID } ],
            "ManagerForChassis": [ { ODATA_ID: CHASSIS_ID } ],
            "ManagerInChassis": { ODATA_ID: CHASSIS_ID }
        },
        "Actions": {
            "#Manager.Reset": {
                "target": "/redfish/v1/Managers/BMC-1/Actions/Manager.Reset",
                "ResetType@Redfish.AllowableValues": ["ForceRestart", "GracefulRestart"]
            },
            "#Manager.ResetToDefaults": {
                "target": "/redfish/v1/Managers/BMC-1/Actions/Manager.ResetToDefaults",
                "ResetType@Redfish.AllowableValues": ["ResetAll", "PreserveNetwork"]
            }
        }
    })
}

#[must_use]
pub fn network_protocol() -> Value {
    json!({
        ODATA_ID: NETWORK_PROTOCOL_ID,
        ODATA_TYPE: "#ManagerNetworkProtocol.v1_0_0.ManagerNetworkProtocol",
        "Id": "NetworkProtocol",
        "Name": "Manager Network Protocol",
        "HostName": "web483-bmc",
        "FQDN": "web483-bmc.dmtf.org",
        "HTTP": { "ProtocolEnabled": true, "Port": 80 },
        "HTTPS": { "ProtocolEnabled": true, "Port": 443 },
        "IPMI": { "ProtocolEnabled": true, "Port": 623 },
        "SSH": { "ProtocolEnabled": true, "Port": 22 },
        "SNMP": { "ProtocolEnabled": true, "Port": 161 },
        "VirtualMedia": { "ProtocolEnabled": true, "Port": 17988 },
        "SSDP": { "ProtocolEnabled": true, "Port": 1900 },
        "Telnet": { "ProtocolEnabled": true, "Port": 23 },
        "KVMIP": { "ProtocolEnabled": true, "Port": 5288 },
        "NTP": {
            "ProtocolEnabled": true,
            "Port": 123,
            "NTPServers": ["0.africa.pool.ntp.org"]
        },
        "Status": { "State": "Enabled", "Health": "OK" }
    })
}

#[must_use]
pub fn virtual_media() -> Value {
    json!({
        ODATA_ID: CD_ID,
        ODATA_TYPE: "#VirtualMedia.v1_3_0.VirtualMedia",
        "Id": "CD",
        "Name": "Virtual CD",
        "MediaTypes": ["CD", "DVD"],
        "Image": "redfish.dmtf.org/freeImages/freeOS.1.1.iso",
        "ImageName": "mymedia-read-only",
        "ConnectedVia": "Applet",
        "Inserted": true,
        "WriteProtected": false,
        "TransferMethod": "Stream",
        "TransferProtocolType": "HTTP",
        "Actions": {
            "#VirtualMedia.EjectMedia": {
                "target": "/redfish/v1/Managers/BMC-1/VirtualMedia/CD/Actions/VirtualMedia.EjectMedia"
            },
            "#VirtualMedia.InsertMedia": {
                "target": "/redfish/v1/Managers/BMC-1/VirtualMedia/CD/Actions/VirtualMedia.InsertMedia",
                "TransferProtocolType@Redfish.AllowableValues": ["HTTP", "HTTPS"]
            }
        }
    })
}

#[must_use]
pub fn aggregation_service() -> Value {
    json!({
        ODATA_ID: AGGREGATION_SERVICE_ID,
        ODATA_TYPE: "#AggregationService.v1_0_1.AggregationService",
        "Id": "AggregationService",
        "Name": "Aggregation Service",
        "ServiceEnabled": true,
        "Status": { "State": "Enabled", "Health": "OK" },
        "Aggregates": { ODATA_ID: AGGREGATES_ID }
    })
}

#[must_use]
pub fn aggregate() -> Value {
    json!({
        ODATA_ID: AGGREGATE_ID,
        ODATA_TYPE: "#Aggregate.v1_0_1.Aggregate",
        "Id": "Aggregate-1",
        "Name": "Aggregate One",
        "Elements": [
            { ODATA_ID: "/redfish/v1/Systems/cpu-1" },
            { ODATA_ID: "/redfish/v1/Systems/cpu-2" }
        ],
        "Elements@odata.count": 2,
        "Actions": {
            "#Aggregate.AddElements": {
                "target": "/redfish/v1/AggregationService/Aggregates/Aggregate-1/Actions/Aggregate.AddElements"
            },
            "#Aggregate.RemoveElements": {
                "target": "/redfish/v1/AggregationService/Aggregates/Aggregate-1/Actions/Aggregate.RemoveElements"
            },
            "#Aggregate.Reset": {
                "target": "/redfish/v1/AggregationService/Aggregates/Aggregate-1/Actions/Aggregate.Reset"
            },
            "#Aggregate.SetDefaultBootOrder": {
                "target": "/redfish/v1/AggregationService/Aggregates/Aggregate-1/Actions/Aggregate.SetDefaultBootOrder"
            }
        }
    })
}
