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

use std::fmt;

use crate::{
    codegen::escape_label,
    error::{Error, Result},
    gadget::GadgetKind,
};

/// A variable name appearing in generated code.
///
/// Names are taken verbatim from the circuit description and are never
/// invented or renamed here. Construction checks the name is a valid
/// identifier in the generated source.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Ident(String);

impl Ident {
    pub fn new(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(c) => {
                (c.is_ascii_alphabetic() || c == '_') &&
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };

        if !valid {
            return Err(Error::InvalidIdent(name.to_string()))
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single operation record consumed by the code generator.
///
/// Records are built by the circuit-description reader, rendered once,
/// and discarded. `line` is the line of the originating description,
/// carried for error reporting.
#[derive(Clone, Debug)]
pub struct GadgetCall {
    pub label: String,
    pub kind: GadgetKind,
    pub output: Option<Ident>,
    pub args: Vec<Ident>,
    pub line: usize,
}

impl GadgetCall {
    /// Construct a record, rejecting shapes the catalog does not accept.
    pub fn new(
        label: &str,
        kind: GadgetKind,
        output: Option<Ident>,
        args: Vec<Ident>,
        line: usize,
    ) -> Result<Self> {
        let call = Self { label: label.to_string(), kind, output, args, line };
        call.check()?;
        Ok(call)
    }

    /// Check this record against the catalog's shape for its kind.
    pub fn check(&self) -> Result<()> {
        let (return_types, arg_types) = self.kind.arg_types();

        if self.args.len() != arg_types.len() {
            return Err(Error::ArityMismatch {
                gadget: self.kind.name(),
                expected: arg_types.len(),
                found: self.args.len(),
                line: self.line,
            })
        }

        match (&self.output, return_types.is_empty()) {
            (Some(_), true) => return Err(Error::UnexpectedOutput(self.kind.name())),
            (None, false) => return Err(Error::MissingOutput(self.kind.name())),
            _ => {}
        }

        escape_label(&self.label)?;

        Ok(())
    }
}
