use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A lexical scope of variable types.
///
/// Scopes are never mutated once built. Extending one creates a child scope
/// that points back at its parent, so outer scopes stay valid for sibling
/// subtrees.
#[derive(Debug, Default)]
pub struct Environment {
    variable_lookup: HashMap<String, Type>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    pub fn empty() -> Rc<Self> {
        Rc::new(Environment::default())
    }

    /// Returns a child scope holding `bindings`.
    ///
    /// Later bindings replace earlier ones with the same name.
    pub fn extend(
        self: &Rc<Self>,
        bindings: impl IntoIterator<Item = (String, Type)>,
    ) -> Rc<Self> {
        Rc::new(Environment {
            variable_lookup: bindings.into_iter().collect(),
            parent: Some(Rc::clone(self)),
        })
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Type> {
        let mut environment = self;
        loop {
            if let Some(ty) = environment.variable_lookup.get(variable_name) {
                return Some(ty);
            }
            environment = environment.parent.as_deref()?;
        }
    }

    pub fn fetch_variable_type(&self, variable_name: &str, position: Position) -> Result<Type, Error> {
        self.get_variable(variable_name).cloned().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownVariable {
                    variable: variable_name.to_string(),
                },
                position,
            )
        })
    }

    /// Number of scopes between this one and the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut environment = self;
        while let Some(parent) = environment.parent.as_deref() {
            depth += 1;
            environment = parent;
        }
        depth
    }
}
