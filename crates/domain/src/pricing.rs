// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TicketType;
use rust_decimal::Decimal;

/// Computes the price a ticket is sold at.
///
/// The result is `base_price * ticket_type.discount_factor()`, computed in
/// exact decimal arithmetic. No rounding is applied so the stored price can
/// always be re-derived from the base price at reservation time.
#[must_use]
pub fn final_price(base_price: Decimal, ticket_type: TicketType) -> Decimal {
    base_price * ticket_type.discount_factor()
}
