//! Field contracts describing the payload each operation expects.

/// Type of a contract field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 text. Numbers and booleans are coerced to their text form.
    String,
    /// Whole number. Numeric strings and integral floats are coerced.
    Integer,
    /// Any number. Numeric strings are coerced.
    Number,
    /// `true` or `false`, also accepted as the strings `"true"` and `"false"`.
    Boolean,
    /// Array whose elements all have the given type.
    Array(&'static FieldType),
    /// Nested object with its own fields.
    Object(&'static [FieldSpec]),
}

impl FieldType {
    /// Short name used in violation messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::Array(_) => "an array",
            Self::Object(_) => "an object",
        }
    }
}

/// One named field of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the JSON payload
    pub name: &'static str,
    /// Expected type
    pub ty: FieldType,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present and well typed.
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    /// A field that is kept when valid and dropped otherwise.
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

/// The field set one operation expects from the model.
///
/// # Examples
///
/// ```
/// use atelier_extraction::{Contract, FieldSpec, FieldType};
///
/// const NAME: Contract = Contract::new("clothing_name", &[
///     FieldSpec::required("name", FieldType::String),
/// ]);
/// assert_eq!(NAME.single_string_field(), Some("name"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    /// Operation name, used in errors and logs
    pub name: &'static str,
    /// Declared fields, in prompt order
    pub fields: &'static [FieldSpec],
}

impl Contract {
    /// Creates a contract.
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Declared keys, for diagnostics.
    pub fn keys(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.to_string()).collect()
    }

    /// The only field, when the contract declares exactly one.
    pub fn single_field(&self) -> Option<&'static FieldSpec> {
        let fields: &'static [FieldSpec] = self.fields;
        match fields {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Name of the only field, when it is a string.
    pub fn single_string_field(&self) -> Option<&'static str> {
        self.single_field()
            .filter(|f| f.ty == FieldType::String)
            .map(|f| f.name)
    }
}
