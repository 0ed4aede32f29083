// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod assets;
pub mod auth;
pub mod categories;
pub mod config;
pub mod doctor;
pub mod exporter;
pub mod records;
pub mod tags;
pub mod whoami;
