// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Fixed fallback values applied when the operator leaves a credential field
//! empty. The per-seat suffix appended during derivation is what keeps
//! tickets unique even when every seat shares these defaults.

/// Base credential string used when no raw token was supplied for a slot.
pub const DEFAULT_RAW_TOKEN: &str =
    "BeNoABKHo1QVIhHwozICQqwRAAYIatjCaXiADpv/06kTBJlqrYMpwA9q75NoCVxT";

/// Fallback customer-role key material (hex).
pub const DEFAULT_CUSTOMER_KEY_HEX: &str = "6dfb0b853dbfa5309a9763d3c0fdd2727de9b2e6";

/// Fallback event-role key material (hex).
pub const DEFAULT_EVENT_KEY_HEX: &str = "f03c6f066714c536d9e457d79edc74ee0744b999";

/// Inclusive bounds on the number of tickets in a single issuance.
pub const MIN_BATCH_SIZE: usize = 1;
pub const MAX_BATCH_SIZE: usize = 8;
