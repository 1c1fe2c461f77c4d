// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod error;
pub mod keys;
pub mod rotating;

pub use error::KeyMaterialError;
pub use keys::{EncodedSecret, OddLengthHexPolicy, Secret};
pub use rotating::{hotp_sha1, rotating_code, RotatingCode, CODE_DIGITS, ROTATION_PERIOD};
