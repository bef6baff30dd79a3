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

//! Managers (BMCs) and their network protocol settings.

mod manager;
mod network_protocol;

#[doc(inline)]
pub use manager::get_manager;
#[doc(inline)]
pub use manager::list_referenced_managers;
#[doc(inline)]
pub use manager::Manager;
#[doc(inline)]
pub use manager::ManagerProperties;
#[doc(inline)]
pub use manager::ManagerType;
#[doc(inline)]
pub use manager::ResetToDefaultsType;
#[doc(inline)]
pub use network_protocol::get_network_protocol;
#[doc(inline)]
pub use network_protocol::NetworkProtocol;
#[doc(inline)]
pub use network_protocol::NetworkProtocolProperties;
#[doc(inline)]
pub use network_protocol::NtpProtocol;
#[doc(inline)]
pub use network_protocol::Protocol;
