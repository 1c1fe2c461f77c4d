// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use rotapass_ticket::BarcodePayload;

pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// External barcode symbology renderer. Consumed once per refresh tick;
/// the engine treats it as fire-and-forget and never inspects the result
/// beyond logging failures.
pub trait BarcodeRenderer: Send + 'static {
    fn render(&mut self, payload: &BarcodePayload) -> Result<(), RenderError>;
}
