//! Field and method descriptors (JVMS §4.3).

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,

    #[error("unknown type tag {0:?} at position {1} in {2:?}")]
    UnknownTag(char, usize, String),

    #[error("unterminated class name at position {0} in {1:?}")]
    UnterminatedClass(usize, String),

    #[error("empty class name at position {0} in {1:?}")]
    EmptyClass(usize, String),

    #[error("method descriptor {0:?} must start with '('")]
    MissingOpenParen(String),

    #[error("method descriptor {0:?} has no closing ')'")]
    MissingCloseParen(String),

    #[error("void is only valid as a return type in {0:?}")]
    MisplacedVoid(String),

    #[error("trailing characters after position {0} in {1:?}")]
    Trailing(usize, String),
}

/// Primitive value types, plus `void` for return positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'V' => Some(Self::Void),
            'Z' => Some(Self::Boolean),
            'B' => Some(Self::Byte),
            'C' => Some(Self::Char),
            'S' => Some(Self::Short),
            'I' => Some(Self::Int),
            'J' => Some(Self::Long),
            'F' => Some(Self::Float),
            'D' => Some(Self::Double),
            _ => None,
        }
    }

    pub fn tag(self) -> char {
        match self {
            Self::Void => 'V',
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Char => 'C',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// A single parsed field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(Primitive),
    /// Internal class name, e.g. `java/lang/String`.
    Object(String),
    Array { dims: usize, element: Box<Type> },
}

impl Type {
    /// Parse a complete field descriptor such as `[Ljava/lang/String;`.
    pub fn parse(desc: &str) -> Result<Self, DescriptorError> {
        if desc.is_empty() {
            return Err(DescriptorError::Empty);
        }
        let (ty, end) = parse_type(desc, 0)?;
        if end != desc.len() {
            return Err(DescriptorError::Trailing(end, desc.to_string()));
        }
        if ty == Type::Primitive(Primitive::Void) {
            return Err(DescriptorError::MisplacedVoid(desc.to_string()));
        }
        Ok(ty)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    /// Number of local variable slots a value of this type occupies.
    pub fn size(&self) -> usize {
        match self {
            Self::Primitive(Primitive::Void) => 0,
            Self::Primitive(Primitive::Long | Primitive::Double) => 2,
            _ => 1,
        }
    }

    /// Source-style name: `int`, `java.lang.String`, `byte[][]`.
    pub fn class_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.keyword().to_string(),
            Self::Object(internal) => internal.replace('/', "."),
            Self::Array { dims, element } => {
                let mut name = element.class_name();
                for _ in 0..*dims {
                    name.push_str("[]");
                }
                name
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{}", p.tag()),
            Self::Object(internal) => write!(f, "L{internal};"),
            Self::Array { dims, element } => {
                for _ in 0..*dims {
                    f.write_str("[")?;
                }
                write!(f, "{element}")
            }
        }
    }
}

/// A parsed method descriptor: `(args)ret`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    pub args: Vec<Type>,
    pub ret: Type,
}

impl MethodDescriptor {
    pub fn parse(desc: &str) -> Result<Self, DescriptorError> {
        if desc.is_empty() {
            return Err(DescriptorError::Empty);
        }
        if !desc.starts_with('(') {
            return Err(DescriptorError::MissingOpenParen(desc.to_string()));
        }

        let mut args = Vec::new();
        let mut pos = 1;
        loop {
            match desc[pos..].chars().next() {
                None => return Err(DescriptorError::MissingCloseParen(desc.to_string())),
                Some(')') => {
                    pos += 1;
                    break;
                }
                Some(_) => {
                    let (ty, end) = parse_type(desc, pos)?;
                    if ty == Type::Primitive(Primitive::Void) {
                        return Err(DescriptorError::MisplacedVoid(desc.to_string()));
                    }
                    args.push(ty);
                    pos = end;
                }
            }
        }

        let (ret, end) = parse_type(desc, pos)?;
        if end != desc.len() {
            return Err(DescriptorError::Trailing(end, desc.to_string()));
        }
        Ok(Self { args, ret })
    }

    /// Total argument slots, not counting an implicit receiver.
    pub fn args_size(&self) -> usize {
        self.args.iter().map(Type::size).sum()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for arg in &self.args {
            write!(f, "{arg}")?;
        }
        write!(f, "){}", self.ret)
    }
}

/// Parse one type starting at byte `pos`. Returns the type and the end position.
fn parse_type(desc: &str, pos: usize) -> Result<(Type, usize), DescriptorError> {
    let bytes = desc.as_bytes();
    let mut cur = pos;
    while cur < bytes.len() && bytes[cur] == b'[' {
        cur += 1;
    }
    let dims = cur - pos;

    let Some(tag) = desc[cur..].chars().next() else {
        return Err(DescriptorError::UnterminatedClass(pos, desc.to_string()));
    };

    let (element, end) = if tag == 'L' {
        let start = cur + 1;
        let Some(rel) = desc[start..].find(';') else {
            return Err(DescriptorError::UnterminatedClass(cur, desc.to_string()));
        };
        if rel == 0 {
            return Err(DescriptorError::EmptyClass(cur, desc.to_string()));
        }
        (Type::Object(desc[start..start + rel].to_string()), start + rel + 1)
    } else if let Some(p) = Primitive::from_tag(tag) {
        if p == Primitive::Void && dims > 0 {
            return Err(DescriptorError::MisplacedVoid(desc.to_string()));
        }
        (Type::Primitive(p), cur + 1)
    } else {
        return Err(DescriptorError::UnknownTag(tag, cur, desc.to_string()));
    };

    if dims == 0 {
        Ok((element, end))
    } else {
        Ok((
            Type::Array {
                dims,
                element: Box::new(element),
            },
            end,
        ))
    }
}
