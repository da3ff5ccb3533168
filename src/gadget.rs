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

use crate::types::VarType;

/// Macro to define all gadgets in a single place.
/// This generates the enum definition, `from_name`, `name`, and `arg_types` methods.
///
/// Format for each gadget:
/// ```text
/// [doc_comments]
/// VariantName = "string_name", (return_types), (arg_types)
/// ```
macro_rules! define_gadgets {
    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident = $name:literal,
            ($($ret:expr),*), ($($arg:expr),*)
        );* $(;)?
    ) => {
        /// Gadgets supported by the code generator
        #[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
        pub enum GadgetKind {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
        }

        impl GadgetKind {
            /// Look up a gadget by its string name (used in circuit descriptions).
            pub fn from_name(n: &str) -> Option<Self> {
                match n {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get the string name of a gadget.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Return a tuple of vectors of types that are accepted by a specific gadget.
            /// `r.0` is the return type(s), and `r.1` is the argument type(s).
            pub fn arg_types(&self) -> (Vec<VarType>, Vec<VarType>) {
                match self {
                    $(Self::$variant => (vec![$($ret),*], vec![$($arg),*]),)*
                }
            }
        }
    };
}

define_gadgets! {
    /// Witness an optional curve point into a circuit variable
    Witness = "witness",
        (VarType::EcPoint), (VarType::EcPointOption);

    /// Assert a curve point is not of small order
    AssertNotSmallOrder = "assert_not_small_order",
        (), (VarType::EcPoint);

    /// Decompose a field element into little-endian boolean bits
    FieldToBits = "fr_as_binary_le",
        (VarType::FrBits), (VarType::Fr);

    /// Multiply a constant generator by a scalar via fixed-base multiplication
    FixedBaseScalarMul = "ec_mul_const",
        (VarType::EcPoint), (VarType::FrBits, VarType::EcFixedPoint);

    /// Elliptic curve addition
    PointAdd = "ec_add",
        (VarType::EcPoint), (VarType::EcPoint, VarType::EcPoint);

    /// Expose a curve point as a public input
    ExposeInput = "emit_ec",
        (), (VarType::EcPoint);
}

#[cfg(test)]
mod tests {
    use super::GadgetKind;

    #[test]
    fn name_lookup_roundtrip() {
        for kind in [
            GadgetKind::Witness,
            GadgetKind::AssertNotSmallOrder,
            GadgetKind::FieldToBits,
            GadgetKind::FixedBaseScalarMul,
            GadgetKind::PointAdd,
            GadgetKind::ExposeInput,
        ] {
            assert_eq!(GadgetKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_does_not_resolve() {
        assert_eq!(GadgetKind::from_name("poseidon_hash"), None);
        assert_eq!(GadgetKind::from_name(""), None);
        assert_eq!(GadgetKind::from_name("Witness"), None);
    }

    #[test]
    fn catalog_arities() {
        assert_eq!(GadgetKind::Witness.arg_types().1.len(), 1);
        assert_eq!(GadgetKind::AssertNotSmallOrder.arg_types().1.len(), 1);
        assert_eq!(GadgetKind::FieldToBits.arg_types().1.len(), 1);
        assert_eq!(GadgetKind::FixedBaseScalarMul.arg_types().1.len(), 2);
        assert_eq!(GadgetKind::PointAdd.arg_types().1.len(), 2);
        assert_eq!(GadgetKind::ExposeInput.arg_types().1.len(), 1);

        // Only the checks and the exposure have no return value.
        assert!(GadgetKind::AssertNotSmallOrder.arg_types().0.is_empty());
        assert!(GadgetKind::ExposeInput.arg_types().0.is_empty());
        assert!(!GadgetKind::Witness.arg_types().0.is_empty());
    }
}
