use std::fmt::Display;

/// A single name-to-value association introduced by a `let`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: i32,
}

/// An ordered sequence of bindings, innermost first.
///
/// Duplicate names may coexist; lookup resolves to the first match, which is
/// how shadowing is realised. Extension builds a new sequence instead of
/// mutating the receiver, so sibling subtrees of an evaluation never observe
/// each other's bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: Vec<Binding>,
}

impl Environment {
    pub fn empty() -> Environment {
        Environment { bindings: vec![] }
    }

    pub fn from_bindings(bindings: Vec<Binding>) -> Environment {
        Environment { bindings }
    }

    /// Linear scan from the innermost binding outwards.
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value)
    }

    /// Returns a new environment with `name` bound in front of the
    /// receiver's bindings. The receiver is left untouched.
    pub fn extended(&self, name: String, value: i32) -> Environment {
        let mut bindings = Vec::with_capacity(self.bindings.len() + 1);
        bindings.push(Binding { name, value });
        bindings.extend(self.bindings.iter().cloned());
        Environment { bindings }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", binding.name, binding.value)?;
        }
        write!(f, "]")
    }
}
