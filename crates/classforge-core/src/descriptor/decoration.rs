//! Decoration descriptors.

/// A request to attach one named, parameterized decorator to a class or field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Decorator name.
    pub name: String,
    /// Module the decorator must be imported from.
    pub import_from: String,
    /// Ordered decorator arguments.
    pub args: Vec<DecoratorArg>,
}

/// One decorator argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorArg {
    /// Literal source text (identifiers, numbers, booleans).
    Literal(String),
    /// A string literal; rendered with quotes.
    Quoted(String),
    /// A forwarding lambda returning the named type (`() => T`).
    Forward(String),
    /// An options record of ordered key/argument pairs.
    Options(Vec<DecoratorOption>),
}

/// One entry of an options record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorOption {
    /// Option key.
    pub key: String,
    /// Option value.
    pub value: DecoratorArg,
}

impl Decoration {
    /// Create a decorator without arguments.
    pub fn new(name: impl Into<String>, import_from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_from: import_from.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn with_arg(mut self, arg: DecoratorArg) -> Self {
        self.args.push(arg);
        self
    }
}

impl DecoratorArg {
    /// Create a literal argument.
    pub fn literal(text: impl Into<String>) -> Self {
        DecoratorArg::Literal(text.into())
    }

    /// Create a quoted string argument.
    pub fn quoted(text: impl Into<String>) -> Self {
        DecoratorArg::Quoted(text.into())
    }

    /// Create a forwarding lambda argument.
    pub fn forward(type_name: impl Into<String>) -> Self {
        DecoratorArg::Forward(type_name.into())
    }

    /// Create an options record from key/value pairs.
    pub fn options<K: Into<String>>(entries: impl IntoIterator<Item = (K, DecoratorArg)>) -> Self {
        DecoratorArg::Options(
            entries
                .into_iter()
                .map(|(key, value)| DecoratorOption {
                    key: key.into(),
                    value,
                })
                .collect(),
        )
    }

    /// Look up an option by key when this argument is an options record.
    pub fn option(&self, key: &str) -> Option<&DecoratorArg> {
        match self {
            DecoratorArg::Options(entries) => {
                entries.iter().find(|o| o.key == key).map(|o| &o.value)
            }
            _ => None,
        }
    }
}
