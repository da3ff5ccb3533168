/* This file is part of DarkFi (https://dark.fi)
 *
 * Copyright (C) 2020-2026 Dyne.org foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/// Variable types the gadget catalog speaks about
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VarType {
    /// Elliptic curve point
    EcPoint,

    /// Optional elliptic curve point, as supplied for witnessing
    EcPointOption,

    /// Fr field element
    Fr,

    /// Little-endian boolean decomposition of a field element
    FrBits,

    /// Elliptic curve fixed point (a constant generator)
    EcFixedPoint,
}

impl VarType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::EcPoint => "EcPoint",
            Self::EcPointOption => "EcPointOption",
            Self::Fr => "Fr",
            Self::FrBits => "FrBits",
            Self::EcFixedPoint => "EcFixedPoint",
        }
    }
}
