use std::fmt;

/// Type tag resolved by the binder. Integers are the only values a line can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
}

impl ValueType {
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
