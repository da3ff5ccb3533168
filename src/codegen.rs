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

use log::trace;

use crate::{
    error::{Error, Result},
    gadget::GadgetKind,
    ir::{GadgetCall, Ident},
};

/// Escape a diagnostic label so it can be embedded as a string literal
/// in the generated source.
///
/// The label is opaque data, never code. Quotes, backslashes and common
/// whitespace are rewritten to their escape sequences; any other control
/// character has no faithful spelling inside the literal and is rejected.
pub fn escape_label(label: &str) -> Result<String> {
    let mut escaped = String::with_capacity(label.len());

    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => return Err(Error::UnescapableLabel(label.to_string())),
            c => escaped.push(c),
        }
    }

    Ok(escaped)
}

/// Declare `out` bound to a witnessed curve point derived from the
/// optional value `point`.
pub fn witness(label: &str, out: &Ident, point: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(
        r#"let {out} = ecc::EdwardsPoint::witness(
    cs.namespace(|| "{label}"),
    {point}.map(jubjub::ExtendedPoint::from))?;"#
    ))
}

/// Constrain `point` to not be of small order.
pub fn assert_not_small_order(label: &str, point: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(r#"{point}.assert_not_small_order(cs.namespace(|| "{label}"))?;"#))
}

/// Declare `out` as the little-endian boolean decomposition of `fr`.
pub fn fr_as_binary_le(label: &str, out: &Ident, fr: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(
        r#"let {out} = boolean::field_into_boolean_vec_le(
    cs.namespace(|| "{label}"), {fr})?;"#
    ))
}

/// Declare `out = fr * base` via fixed-base multiplication.
/// The emitted call takes the generator before the scalar.
pub fn ec_mul_const(label: &str, out: &Ident, fr: &Ident, base: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(
        r#"let {out} = ecc::fixed_base_multiplication(
    cs.namespace(|| "{label}"),
    &{base},
    &{fr},
)?;"#
    ))
}

/// Declare `out = a + b`.
pub fn ec_add(label: &str, out: &Ident, a: &Ident, b: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(r#"let {out} = {a}.add(cs.namespace(|| "{label}"), &{b})?;"#))
}

/// Mark `point` as a public input of the circuit.
pub fn emit_ec(label: &str, point: &Ident) -> Result<String> {
    let label = escape_label(label)?;
    Ok(format!(r#"{point}.inputize(cs.namespace(|| "{label}"))?;"#))
}

/// Render a single operation record into its source fragment.
///
/// The record's shape is checked against the catalog before any
/// substitution happens, so a malformed record fails here instead of
/// producing truncated output. Rendering is pure: identical records
/// always produce byte-identical text, and fragments carry no trailing
/// newline. Joining them in order is the caller's concern.
pub fn render(call: &GadgetCall) -> Result<String> {
    call.check()?;

    trace!(target: "codegen", "Rendering `{}` gadget (line {})", call.kind.name(), call.line);

    // check() verified the output shape, so producing kinds have Some here.
    let out = call.output.as_ref();
    match call.kind {
        GadgetKind::Witness => witness(&call.label, out.unwrap(), &call.args[0]),
        GadgetKind::AssertNotSmallOrder => assert_not_small_order(&call.label, &call.args[0]),
        GadgetKind::FieldToBits => fr_as_binary_le(&call.label, out.unwrap(), &call.args[0]),
        GadgetKind::FixedBaseScalarMul => {
            ec_mul_const(&call.label, out.unwrap(), &call.args[0], &call.args[1])
        }
        GadgetKind::PointAdd => ec_add(&call.label, out.unwrap(), &call.args[0], &call.args[1]),
        GadgetKind::ExposeInput => emit_ec(&call.label, &call.args[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Ident {
        Ident::new(s).unwrap()
    }

    #[test]
    fn witness_template() -> Result<()> {
        let text = witness("load pk", &ident("p"), &ident("maybe_pk"))?;
        assert_eq!(
            text,
            "let p = ecc::EdwardsPoint::witness(\n    cs.namespace(|| \"load pk\"),\n    maybe_pk.map(jubjub::ExtendedPoint::from))?;"
        );
        Ok(())
    }

    #[test]
    fn ec_mul_const_generator_precedes_scalar() -> Result<()> {
        let text = ec_mul_const("r*G", &ident("rg"), &ident("r_bits"), &ident("G"))?;
        assert_eq!(
            text,
            "let rg = ecc::fixed_base_multiplication(\n    cs.namespace(|| \"r*G\"),\n    &G,\n    &r_bits,\n)?;"
        );
        Ok(())
    }

    #[test]
    fn single_line_templates() -> Result<()> {
        assert_eq!(
            assert_not_small_order("pk order", &ident("p"))?,
            "p.assert_not_small_order(cs.namespace(|| \"pk order\"))?;"
        );
        assert_eq!(
            ec_add("sum", &ident("s"), &ident("p"), &ident("rg"))?,
            "let s = p.add(cs.namespace(|| \"sum\"), &rg)?;"
        );
        assert_eq!(
            emit_ec("expose s", &ident("s"))?,
            "s.inputize(cs.namespace(|| \"expose s\"))?;"
        );
        Ok(())
    }

    #[test]
    fn label_escaping() -> Result<()> {
        assert_eq!(escape_label(r#"say "hi""#)?, r#"say \"hi\""#);
        assert_eq!(escape_label(r"back\slash")?, r"back\\slash");
        assert_eq!(escape_label("tab\there")?, "tab\\there");
        assert_eq!(escape_label("line\nbreak")?, "line\\nbreak");

        assert!(matches!(escape_label("nul\0"), Err(Error::UnescapableLabel(_))));
        Ok(())
    }

    #[test]
    fn escaped_label_lands_in_namespace() -> Result<()> {
        let text = emit_ec(r#"expose "s""#, &ident("s"))?;
        assert_eq!(text, r#"s.inputize(cs.namespace(|| "expose \"s\""))?;"#);
        Ok(())
    }

    #[test]
    fn render_rejects_malformed_records() {
        // Built as a struct literal to bypass the constructor check.
        let call = GadgetCall {
            label: "sum".to_string(),
            kind: GadgetKind::PointAdd,
            output: Some(Ident::new("s").unwrap()),
            args: vec![Ident::new("p").unwrap()],
            line: 5,
        };
        let err = render(&call).unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { gadget: "ec_add", expected: 2, found: 1, .. }));

        let call = GadgetCall {
            label: "bad\0label".to_string(),
            kind: GadgetKind::ExposeInput,
            output: None,
            args: vec![Ident::new("s").unwrap()],
            line: 6,
        };
        assert!(matches!(render(&call).unwrap_err(), Error::UnescapableLabel(_)));
    }

    #[test]
    fn render_is_deterministic() -> Result<()> {
        let call = GadgetCall::new(
            "r bits",
            GadgetKind::FieldToBits,
            Some(ident("r_bits")),
            vec![ident("r")],
            3,
        )?;
        assert_eq!(render(&call)?, render(&call)?);
        Ok(())
    }
}
