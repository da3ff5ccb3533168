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

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::{Error, Result},
    ir::{GadgetCall, Ident},
    types::VarType,
};

/// Tracks variable bindings across a sequence of operation records.
///
/// The renderer performs no cross-record checks: an operand naming a
/// variable nothing ever bound still renders. Callers wanting that
/// verified run each record through a tracer first, seeded with the
/// description's external inputs and constants.
#[derive(Default)]
pub struct BindingTracer {
    bindings: IndexMap<String, VarType>,
}

impl BindingTracer {
    pub fn new() -> Self {
        Self { bindings: IndexMap::new() }
    }

    /// Declare an externally supplied variable, e.g. a witness value or
    /// a constant generator.
    pub fn declare(&mut self, name: &Ident, typ: VarType) {
        self.bindings.insert(name.as_str().to_string(), typ);
    }

    /// Verify a record's operands against the current bindings, then
    /// bind its output to the kind's return type.
    pub fn trace_call(&mut self, call: &GadgetCall) -> Result<()> {
        call.check()?;

        let (return_types, arg_types) = call.kind.arg_types();

        for (arg, typ) in call.args.iter().zip(arg_types.iter()) {
            match self.bindings.get(arg.as_str()) {
                Some(found) if found == typ => {}
                Some(found) => {
                    return Err(Error::TypeMismatch {
                        gadget: call.kind.name(),
                        expected: typ.name(),
                        found: found.name(),
                        line: call.line,
                    })
                }
                None => {
                    return Err(Error::UnboundVar {
                        name: arg.as_str().to_string(),
                        line: call.line,
                    })
                }
            }
        }

        if let Some(out) = &call.output {
            trace!(target: "tracer", "Binding `{}` as {}", out, return_types[0].name());
            // Note that later variables shadow earlier ones. We accept this.
            self.bindings.insert(out.as_str().to_string(), return_types[0]);
        }

        Ok(())
    }
}
