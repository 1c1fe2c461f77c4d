// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod clock;
pub mod error;
pub mod refresher;
pub mod renderer;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use error::DisplayError;
pub use refresher::{start_barcode_refresher, BarcodeRefresher};
pub use renderer::{BarcodeRenderer, RenderError};
pub use session::{find_ticket, DisplaySession};
