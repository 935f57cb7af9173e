use std::fmt;

/// Scalar element types a set attribute may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    String,
    Bool,
    Int64,
    Float64,
}

/// Attribute kinds understood by the wrapper value model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    Float64,
    Set(ElementType),
}

impl From<ElementType> for AttributeType {
    fn from(element: ElementType) -> Self {
        match element {
            ElementType::String => AttributeType::String,
            ElementType::Bool => AttributeType::Bool,
            ElementType::Int64 => AttributeType::Int64,
            ElementType::Float64 => AttributeType::Float64,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::String => "string",
            ElementType::Bool => "bool",
            ElementType::Int64 => "int64",
            ElementType::Float64 => "float64",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Set(element) => write!(f, "set of {}", element),
            AttributeType::String => ElementType::String.fmt(f),
            AttributeType::Bool => ElementType::Bool.fmt(f),
            AttributeType::Int64 => ElementType::Int64.fmt(f),
            AttributeType::Float64 => ElementType::Float64.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_converts_to_scalar_attribute_type() {
        assert_eq!(AttributeType::from(ElementType::Int64), AttributeType::Int64);
        assert_eq!(
            AttributeType::from(ElementType::String),
            AttributeType::String
        );
    }

    #[test]
    fn set_attribute_type_keeps_element_type() {
        let attr_type = AttributeType::Set(ElementType::Float64);

        match attr_type {
            AttributeType::Set(element) => assert_eq!(element, ElementType::Float64),
            _ => panic!("Expected Set type"),
        }
    }

    #[test]
    fn attribute_type_display_names_set_elements() {
        assert_eq!(AttributeType::Set(ElementType::Int64).to_string(), "set of int64");
        assert_eq!(AttributeType::Bool.to_string(), "bool");
    }
}
